pub mod list_state;
pub mod user_record;
