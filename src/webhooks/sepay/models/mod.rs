pub mod sepay_event;
pub mod webhook_response;
