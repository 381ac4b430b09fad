pub mod trigger;

pub use crate::domain::model::{JobTrigger, TriggerRequest, TriggerResponse, TriggeredBuild};
pub use crate::domain::plan::TriggerPlan;
pub use crate::domain::ports::CiClient;
pub use crate::utils::error::Result;
