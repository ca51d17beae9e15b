mod account_record;
mod outcome;
mod registration;
mod validation;
