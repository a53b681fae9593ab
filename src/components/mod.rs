mod app;
mod city_details;
mod city_form;
mod city_item;
mod city_list;
mod country_item;
mod country_list;
mod map;
mod message;
mod spinner;

pub use app::App;
pub use city_details::CityDetails;
pub use city_form::CityForm;
pub use city_item::CityItem;
pub use city_list::CityList;
pub use country_item::CountryItem;
pub use country_list::CountryList;
pub use map::MapView;
pub use message::Message;
pub use spinner::Spinner;
