mod crud;
mod list;

pub use crud::{create, delete, edit_form, new_form, update};
pub use list::{export_csv, list};
