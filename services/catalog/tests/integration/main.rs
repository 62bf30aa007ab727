mod account_test;
mod admin_test;
mod favorite_test;
mod helpers;
mod progress_test;
