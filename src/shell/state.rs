use crate::modules::exercise::adapters::outbound::log_store_in_memory::InMemoryLogStore;
use crate::modules::exercise::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::exercise::use_cases::add_exercise::handler::AddExerciseHandler;
use crate::modules::exercise::use_cases::create_user::handler::CreateUserHandler;
use crate::modules::exercise::use_cases::get_exercise_log::handler::GetExerciseLogHandler;
use crate::modules::exercise::use_cases::list_users::handler::ListUsersHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_user: Arc<CreateUserHandler<InMemoryUserStore>>,
    pub add_exercise: Arc<AddExerciseHandler<InMemoryUserStore, InMemoryLogStore>>,
    pub list_users: Arc<ListUsersHandler<InMemoryUserStore>>,
    pub get_exercise_log: Arc<GetExerciseLogHandler<InMemoryUserStore, InMemoryLogStore>>,
}

impl AppState {
    pub fn new(users: Arc<InMemoryUserStore>, logs: Arc<InMemoryLogStore>) -> Self {
        Self {
            create_user: Arc::new(CreateUserHandler::new(users.clone())),
            add_exercise: Arc::new(AddExerciseHandler::new(users.clone(), logs.clone())),
            list_users: Arc::new(ListUsersHandler::new(users.clone())),
            get_exercise_log: Arc::new(GetExerciseLogHandler::new(users, logs)),
        }
    }
}
