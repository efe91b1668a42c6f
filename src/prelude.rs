pub use crate::cache::{Arrangement, CacheMetricsSnapshot, DEFAULT_SEED, ValueCache, ValuePool};
pub use crate::ds::ForwardList;
pub use crate::element::{
    Element, NonTrivialArrayMedium, NonTrivialString, TrivialHuge, TrivialLarge, TrivialMedium,
    TrivialMonster, TrivialSmall,
};
pub use crate::error::ConfigError;
pub use crate::policy::operation::{
    EmplaceBack, EmplaceFront, Erase, EraseBack, EraseBackSwap, EraseFront, EraseFrontSwap,
    EraseMiddle, EraseMiddleSwap, FastestAddition, FastestAdditionBackup, FillBack,
    FillBackBackup, FillBackInserter, FillFront, Find, FullErase, Insert, InsertSimple, Iterate,
    IterateAndClear, NoOp, RandomErase, RandomSortedInsert, RemoveErase, ReserveSize, Reverse,
    SmartDelete, Sort, Write,
};
pub use crate::policy::setup::{
    BackupSmartFilled, Empty, EmptyPrepareBackup, Filled, FilledRandom, FilledRandomInsert,
    FilledSequential, SmartFilled,
};
pub use crate::policy::{Operation, Setup, Shrink, shrink};
pub use crate::traits::{Capabilities, ContainerKind, Outcome, SequenceContainer};
