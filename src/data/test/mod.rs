mod service_store;
mod team_store;
