pub mod shared {
    pub mod core {
        pub mod dates;
    }
}

pub mod modules {
    pub mod exercise {
        pub mod core {
            pub mod errors;
            pub mod log_entry;
            pub mod user;
        }
        pub mod use_cases {
            pub mod resolve_user;
            pub mod create_user {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod add_exercise {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_exercise_log {
                pub mod envelope;
                pub mod handler;
                pub mod params;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod log_store;
                pub mod log_store_in_memory;
                pub mod user_store;
                pub mod user_store_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod exercise_log_tests;
    }
}
