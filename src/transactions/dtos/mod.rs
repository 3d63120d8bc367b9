pub mod add_expense_dto;
