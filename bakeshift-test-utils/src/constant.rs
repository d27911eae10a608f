//! Constants shared by fixtures and tests.

/// Plain-text password every fixture user is created with.
pub static TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// Lowest bcrypt cost, keeps fixture user creation fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Domain used when deriving fixture user email addresses from their names.
pub static TEST_EMAIL_DOMAIN: &str = "bakeshift.test";
