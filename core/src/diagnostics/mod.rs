pub mod source_map;
pub mod stack_trace;
pub mod traceback;
