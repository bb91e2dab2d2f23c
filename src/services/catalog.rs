//! Static activity and restaurant catalogs backing fallback itinerary
//! synthesis. Entries are destination-agnostic placeholders; nothing here
//! changes at runtime and every list is non-empty.

use crate::models::preference::PreferenceTag;

#[derive(Debug, Clone, Copy)]
pub struct PointOfInterest {
    pub name: &'static str,
    pub address: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Restaurant {
    pub name: &'static str,
    pub address: &'static str,
    pub cuisine: &'static str,
    pub price_range: &'static str,
}

const ADVENTURE: [PointOfInterest; 6] = [
    PointOfInterest { name: "Summit Ridge Trailhead", address: "14 Ridgeline Road", kind: "hiking" },
    PointOfInterest { name: "Whitewater Rafting Outpost", address: "2 River Bend Lane", kind: "rafting" },
    PointOfInterest { name: "Canyon Zipline Park", address: "88 Gorge View Drive", kind: "ziplining" },
    PointOfInterest { name: "Old Quarry Climbing Center", address: "31 Stonecutter Way", kind: "climbing" },
    PointOfInterest { name: "Coastal Kayak Basecamp", address: "5 Harbor Slip Road", kind: "kayaking" },
    PointOfInterest { name: "Highland Bike Circuit", address: "120 Moor Crossing", kind: "cycling" },
];

const CULTURE: [PointOfInterest; 6] = [
    PointOfInterest { name: "National History Museum", address: "1 Museum Square", kind: "museum" },
    PointOfInterest { name: "Old Town Cathedral", address: "3 Cathedral Close", kind: "landmark" },
    PointOfInterest { name: "Heritage Walking District", address: "Old Town Gate", kind: "historic district" },
    PointOfInterest { name: "Royal Opera House", address: "22 Concert Lane", kind: "performing arts" },
    PointOfInterest { name: "Folk Art Gallery", address: "9 Painters Row", kind: "gallery" },
    PointOfInterest { name: "Ancient City Walls", address: "Rampart Walk", kind: "landmark" },
];

const FOOD: [PointOfInterest; 6] = [
    PointOfInterest { name: "Central Food Market", address: "40 Market Hall", kind: "food market" },
    PointOfInterest { name: "Street Food Alley", address: "Night Market Lane", kind: "street food" },
    PointOfInterest { name: "Artisan Cheese Cellar", address: "7 Dairy Court", kind: "tasting room" },
    PointOfInterest { name: "Spice Bazaar", address: "15 Merchant Row", kind: "market" },
    PointOfInterest { name: "Riverside Cooking School", address: "2 Quay Street", kind: "cooking class" },
    PointOfInterest { name: "Waterfront Fish Market", address: "1 Pier Road", kind: "food market" },
];

const RELAXATION: [PointOfInterest; 6] = [
    PointOfInterest { name: "Botanical Thermal Baths", address: "60 Spring Gardens", kind: "spa" },
    PointOfInterest { name: "Lakeside Promenade", address: "Lakeshore Drive", kind: "promenade" },
    PointOfInterest { name: "Serenity Day Spa", address: "12 Willow Court", kind: "spa" },
    PointOfInterest { name: "Riverside Tea House", address: "8 Bridge Approach", kind: "tea house" },
    PointOfInterest { name: "City Park Rose Garden", address: "Grand Park, East Gate", kind: "garden" },
    PointOfInterest { name: "Sunset Beach Club", address: "Shoreline Boulevard", kind: "beach club" },
];

const NATURE: [PointOfInterest; 6] = [
    PointOfInterest { name: "Grand Botanical Gardens", address: "100 Conservatory Way", kind: "garden" },
    PointOfInterest { name: "Cliffside Coastal Path", address: "Lighthouse Trailhead", kind: "scenic walk" },
    PointOfInterest { name: "Wetland Bird Reserve", address: "Marsh Gate Road", kind: "nature reserve" },
    PointOfInterest { name: "Emerald Forest Preserve", address: "Forest Ranger Station", kind: "forest" },
    PointOfInterest { name: "Mountain Lookout Point", address: "Summit Access Road", kind: "viewpoint" },
    PointOfInterest { name: "River Gorge Nature Trail", address: "Gorge Visitor Center", kind: "nature trail" },
];

const SHOPPING: [PointOfInterest; 6] = [
    PointOfInterest { name: "Grand Central Bazaar", address: "200 Bazaar Street", kind: "bazaar" },
    PointOfInterest { name: "Antique Quarter", address: "Collectors Lane", kind: "antiques" },
    PointOfInterest { name: "Designer Flagship Row", address: "50 Fashion Avenue", kind: "boutiques" },
    PointOfInterest { name: "Artisan Craft Collective", address: "18 Makers Yard", kind: "crafts" },
    PointOfInterest { name: "Vintage Record Exchange", address: "33 Analog Alley", kind: "vintage shop" },
    PointOfInterest { name: "Weekend Flea Market", address: "Old Rail Depot", kind: "flea market" },
];

const RESTAURANTS: [Restaurant; 10] = [
    Restaurant { name: "The Copper Kettle", address: "4 Clock Tower Square", cuisine: "bistro", price_range: "$$" },
    Restaurant { name: "Harbor & Vine", address: "19 Dockside Walk", cuisine: "seafood", price_range: "$$$" },
    Restaurant { name: "Casa Lucia", address: "27 Garden Terrace", cuisine: "Italian", price_range: "$$" },
    Restaurant { name: "The Spice Route", address: "6 Caravan Court", cuisine: "Indian", price_range: "$$" },
    Restaurant { name: "Golden Lantern", address: "52 Lantern Street", cuisine: "Cantonese", price_range: "$$" },
    Restaurant { name: "La Petite Table", address: "11 Rue des Fleurs", cuisine: "French", price_range: "$$$" },
    Restaurant { name: "Ember & Oak", address: "73 Foundry Lane", cuisine: "steakhouse", price_range: "$$$$" },
    Restaurant { name: "The Greenhouse", address: "3 Orangery Walk", cuisine: "vegetarian", price_range: "$$" },
    Restaurant { name: "Sakura House", address: "38 Paper Lantern Row", cuisine: "Japanese", price_range: "$$" },
    Restaurant { name: "Market Street Diner", address: "90 Market Street", cuisine: "American", price_range: "$" },
];

/// Ordered POI list for one preference category.
pub fn activities_for(tag: PreferenceTag) -> &'static [PointOfInterest] {
    match tag {
        PreferenceTag::Adventure => &ADVENTURE,
        PreferenceTag::Culture => &CULTURE,
        PreferenceTag::Food => &FOOD,
        PreferenceTag::Relaxation => &RELAXATION,
        PreferenceTag::Nature => &NATURE,
        PreferenceTag::Shopping => &SHOPPING,
    }
}

/// Flat dining list shared across all categories and days.
pub fn restaurants() -> &'static [Restaurant] {
    &RESTAURANTS
}
