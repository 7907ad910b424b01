mod accounts;
mod common;
