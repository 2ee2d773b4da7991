use crate::commands::operations::{dispatch_resolution, ensure_repository_for};
use crate::core::{
    catalog::OperationId, dispatch::resolve, error::Result, flow::FlowState,
};

pub fn execute_status() -> Result<()> {
    ensure_repository_for(OperationId::Status)?;
    dispatch_resolution(resolve(&FlowState::for_operation(OperationId::Status)))
}
