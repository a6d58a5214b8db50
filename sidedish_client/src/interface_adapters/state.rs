use crate::domain::SidedishRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub menu: Arc<dyn SidedishRepository>,
}
