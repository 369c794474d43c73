pub mod filing;
