mod helpers;

mod order_test;
mod profile_test;
