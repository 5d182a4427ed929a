pub mod form_data;
