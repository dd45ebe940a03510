use scroll_assist::error::AppResult;

use crate::app::{run_inspect, run_present};

use super::types::RunPlan;

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Inspect(options) => run_inspect(&options),
        RunPlan::Present(options) => run_present(&options).await,
    }
}
