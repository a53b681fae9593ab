pub mod city_context;
pub mod use_cities;
pub mod use_geolocation;
pub mod use_url_position;

pub use city_context::{use_city_context, CityProvider};
pub use use_cities::UseCitiesHandle;
pub use use_geolocation::{use_geolocation, UseGeolocationHandle};
pub use use_url_position::{parse_lat_lng, push_position_query, use_url_position};
