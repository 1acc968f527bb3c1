//! Every user-facing message of the application.
//!
//! Variants carry the values interpolated into the text; the wording itself
//! lives in [`display`](super::display).

#[derive(Debug, Clone)]
pub enum Message {
    // === BABY MESSAGES ===
    BabyCreated(String),
    BabyRenamed(String),
    BabyRemoved(String),
    BabyNotFound(i64),
    BabySelected(String),
    BabiesHeader,
    NoBabies,
    NoBabySelected,
    ConfirmRemoveBaby(String),

    // === BOTTLE MESSAGES ===
    BottleCreated(u32),
    BottleUpdated,
    BottleDeleted,
    BottleNotFound(i64),
    BottlesHeader,
    NoBottles,
    BottleDayTotal(u32),

    // === DIAPER MESSAGES ===
    DiaperCreated,
    DiaperUpdated,
    DiaperDeleted,
    DiaperNotFound(i64),
    DiapersHeader,
    NoDiapers,
    DiaperDayCount(usize),

    // === SLEEP MESSAGES ===
    SleepCreated,
    SleepUpdated,
    SleepDeleted,
    SleepEnded(String),
    SleepNotFound(i64),
    SleepAlreadyEnded(i64),
    SleepOngoing,
    SleepsHeader,
    NoSleeps,
    SleepDayTotal(String),

    // === STATISTICS MESSAGES ===
    WeeklyStatsHeader,
    NoStats,

    // === NOTIFICATION MESSAGES ===
    NotificationCreated,
    NotificationsHeader,
    NoNotifications,
    NewNotifications(usize),
    NotificationTitleRequired,

    // === CONFIRMATION MESSAGES ===
    ConfirmDelete,
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    DefaultBabySaved(String),
    PromptTimezone,
    PromptDstMode,
    DstModeTimezone,
    DstModeHeuristic,
    PromptHistoryLimit,
    PromptDefaultQuantity,
    PromptDescription,
    PromptOtherDescription,
    OtherDescription,

    // === TABLE HEADERS ===
    ColumnId,
    ColumnTime,
    ColumnQuantity,
    ColumnDescription,
    ColumnStart,
    ColumnEnd,
    ColumnDuration,
    ColumnWeek,
    ColumnDates,
    ColumnTotal,
    ColumnCount,
    ColumnName,
    ColumnCreated,
    ColumnTitle,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    DatabaseVersion(u32),
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String),
}
