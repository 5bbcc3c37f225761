use crate::database::{
    DocumentStore, StoreError,
    models::{OBJECTIVES, Objective, ObjectiveInput},
};

#[derive(Clone)]
pub struct ObjectiveRepository {
    store: DocumentStore,
}

impl ObjectiveRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub async fn get_active_objectives(&self) -> Result<Vec<Objective>, StoreError> {
        let objectives: Vec<Objective> = self.store.get_all(OBJECTIVES).await?;
        Ok(objectives
            .into_iter()
            .filter(Objective::is_active)
            .collect())
    }

    /// Create an active objective. The title may be empty.
    pub async fn create_objective(&self, input: ObjectiveInput) -> Result<Objective, StoreError> {
        let objective = Objective::new(input);

        self.save(&objective).await?;
        self.store
            .add_to_index(OBJECTIVES, &objective.objective_id)
            .await?;

        Ok(objective)
    }

    pub async fn save(&self, objective: &Objective) -> Result<(), StoreError> {
        self.store
            .put(OBJECTIVES, &objective.objective_id, objective)
            .await
    }
}
