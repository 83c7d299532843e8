pub mod car_routes;
pub mod legacy_stats_routes;
