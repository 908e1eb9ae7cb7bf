mod addon;
mod repository;
mod unit_of_work;
