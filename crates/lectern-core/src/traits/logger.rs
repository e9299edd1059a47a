//! Call observation trait.

use crate::call::CallRecord;

/// Observer notified once per recorded call, in issue order.
///
/// The scenario streams records through this seam so presentation stays out
/// of the core: the CLI prints colored console lines, tests collect into a
/// buffer.
pub trait CallLogger: Send + Sync {
    fn on_call(&self, call: &CallRecord);
}
