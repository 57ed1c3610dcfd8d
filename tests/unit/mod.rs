/// Unit-level tests exercising the public library API
mod store_tests;
mod tool_tests;
