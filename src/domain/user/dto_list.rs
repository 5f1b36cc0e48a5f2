/// Default number of rows skipped by a list query.
pub const DEFAULT_SKIP: u64 = 0;
/// Default maximum number of rows returned by a list query.
pub const DEFAULT_LIMIT: u64 = 10;

/// Offset/limit window over the users table, in store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersDto {
    pub skip: u64,
    pub limit: u64,
}

impl Default for ListUsersDto {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}
