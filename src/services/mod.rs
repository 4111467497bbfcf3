pub mod country_service;
pub mod gemini_service;
pub mod hotel_service;
pub mod passport_service;
pub mod travel_buddy;
pub mod trip_planning_service;
