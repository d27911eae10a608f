pub mod activity {
    /// Cron expression for activity feed cleanup
    /// Runs every hour at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}
