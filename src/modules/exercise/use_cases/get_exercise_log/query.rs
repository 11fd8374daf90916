use crate::modules::exercise::adapters::outbound::log_store::{DateRange, LogFilter, LogQuery};
use crate::modules::exercise::use_cases::get_exercise_log::params::LogOptions;

/// Translate normalized options into a store query: scoped to one user, bounded by the
/// exclusive date range. Stores return the matches most recent first.
pub fn build_log_query(user_id: &str, options: &LogOptions) -> LogQuery {
    LogQuery {
        filter: LogFilter {
            user_id: user_id.to_string(),
            date: DateRange {
                gt: options.from,
                lt: options.to,
            },
        },
        limit: options.limit,
    }
}
