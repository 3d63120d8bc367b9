pub mod sepay_webhook_dto;
