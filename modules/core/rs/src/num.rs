use std::fmt::Debug;

/// T values are float numbers
pub trait Float: ::num::Float + Debug + Default {}

impl<T: ::num::Float + Debug + Default> Float for T {}

/// T values are float numbers that can be shared between worker threads
pub trait SyncFloat: Float + Send + Sync {}

impl<T: Float + Send + Sync> SyncFloat for T {}
