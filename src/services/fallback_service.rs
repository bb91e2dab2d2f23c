//! Fallback itinerary synthesis, used whenever the planner service is
//! unreachable or returns a failed run. Builds a fully populated itinerary
//! from the static catalogs; this path never fails.
//!
//! The caller supplies the RNG so tests can seed it. The shuffled restaurant
//! order is the only source of randomness, so repeated calls with identical
//! inputs keep the same shape while the venue picks vary.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::itinerary::{ActivityLocation, DayPlan, Itinerary, Meals, ScheduledActivity};
use crate::models::plan::PlanRequest;
use crate::models::preference::{default_preferences, PreferenceTag};
use crate::services::catalog::{self, PointOfInterest, Restaurant};

const MORNING_SLOT: &str = "09:00";
const LUNCH_SLOT: &str = "12:00";
const AFTERNOON_SLOT: &str = "14:00";
const DINNER_SLOT: &str = "18:00";

/// De-duplication state threaded through day building. One instance per
/// generation call; never shared across requests.
#[derive(Debug, Default)]
struct SelectionState {
    used_activities: HashSet<&'static str>,
    used_restaurants: HashSet<&'static str>,
    restaurant_cursor: usize,
}

/// Convenience entry point for request handlers. Seeds a fresh RNG, so
/// output is non-deterministic across calls.
pub fn generate_with_entropy(request: &PlanRequest) -> Itinerary {
    let mut rng = StdRng::from_entropy();
    generate(request, &mut rng)
}

/// Synthesize a complete itinerary. A non-positive day count yields an empty
/// day list; unknown preference tags fall back to culture.
pub fn generate(request: &PlanRequest, rng: &mut StdRng) -> Itinerary {
    let preferences = resolve_preferences(&request.preferences);

    let mut restaurants: Vec<Restaurant> = catalog::restaurants().to_vec();
    restaurants.shuffle(rng);

    let mut state = SelectionState::default();
    let mut daily_plans = Vec::new();
    for day in 1..=request.days {
        let tag = preferences[(day - 1) as usize % preferences.len()];
        daily_plans.push(build_day_plan(day, tag, &restaurants, &mut state));
    }

    let joined = preferences
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let place = match request.country.as_deref() {
        Some(country) if !country.trim().is_empty() => {
            format!("{}, {}", request.destination, country)
        }
        _ => request.destination.clone(),
    };

    Itinerary {
        title: format!("{}-Day {} Adventure", request.days, request.destination),
        description: format!(
            "Explore {} over {} days with a focus on {}.",
            place, request.days, joined
        ),
        daily_plans,
    }
}

fn resolve_preferences(raw: &[String]) -> Vec<PreferenceTag> {
    let tags: Vec<PreferenceTag> = raw
        .iter()
        .map(|t| PreferenceTag::parse(t).unwrap_or(PreferenceTag::Culture))
        .collect();
    if tags.is_empty() {
        default_preferences()
    } else {
        tags
    }
}

/// Build one day: two themed activities plus lunch and dinner, in fixed time
/// slots. Mutates the shared used-name sets and restaurant cursor so later
/// days see updated exclusion state.
fn build_day_plan(
    day: i32,
    tag: PreferenceTag,
    restaurants: &[Restaurant],
    state: &mut SelectionState,
) -> DayPlan {
    let pois = catalog::activities_for(tag);

    let morning = pick_activity(pois, day, state, None);
    state.used_activities.insert(morning.name);
    let afternoon = pick_activity(pois, day, state, Some(morning.name));
    state.used_activities.insert(afternoon.name);

    let lunch = pick_restaurant(restaurants, state, None);
    let dinner = pick_restaurant(restaurants, state, Some(lunch.name));

    let label = tag.label();
    DayPlan {
        day,
        title: format!("Day {}: {} Highlights", day, label),
        theme: label.to_string(),
        activities: vec![
            activity_slot(
                MORNING_SLOT,
                morning,
                format!("Start the day at {}, a local favorite for {}.", morning.name, morning.kind),
                "2-3 hours",
                "$20-50 per person",
            ),
            meal_slot(LUNCH_SLOT, "Lunch", lunch, "1-1.5 hours", "$15-40 per person"),
            activity_slot(
                AFTERNOON_SLOT,
                afternoon,
                format!("Spend the afternoon at {}, known for {}.", afternoon.name, afternoon.kind),
                "2-3 hours",
                "$15-45 per person",
            ),
            meal_slot(DINNER_SLOT, "Dinner", dinner, "1.5-2 hours", "$25-60 per person"),
        ],
        meals: Meals {
            breakfast: "Breakfast at your accommodation".to_string(),
            lunch: format!("{} ({})", lunch.name, lunch.cuisine),
            dinner: format!("{} ({})", dinner.name, dinner.cuisine),
        },
    }
}

/// First not-yet-used entry in the category list. Once the category is
/// exhausted, fall back to modulo indexing, stepping past the same-day pick
/// so morning and afternoon never collide.
fn pick_activity<'a>(
    pois: &'a [PointOfInterest],
    day: i32,
    state: &SelectionState,
    exclude: Option<&str>,
) -> &'a PointOfInterest {
    if let Some(poi) = pois
        .iter()
        .find(|p| !state.used_activities.contains(p.name) && exclude != Some(p.name))
    {
        return poi;
    }

    let idx = day as usize % pois.len();
    if exclude == Some(pois[idx].name) {
        &pois[(idx + 1) % pois.len()]
    } else {
        &pois[idx]
    }
}

/// Advance the cursor through the shuffled list until an unused venue turns
/// up, giving up after two full passes. Past that point repeats across days
/// are accepted, but the same venue is never served twice in one day.
fn pick_restaurant<'a>(
    restaurants: &'a [Restaurant],
    state: &mut SelectionState,
    exclude: Option<&str>,
) -> &'a Restaurant {
    let budget = restaurants.len() * 2;
    for _ in 0..budget {
        let candidate = &restaurants[state.restaurant_cursor % restaurants.len()];
        state.restaurant_cursor += 1;
        if !state.used_restaurants.contains(candidate.name) && exclude != Some(candidate.name) {
            state.used_restaurants.insert(candidate.name);
            return candidate;
        }
    }

    loop {
        let candidate = &restaurants[state.restaurant_cursor % restaurants.len()];
        state.restaurant_cursor += 1;
        if exclude != Some(candidate.name) {
            state.used_restaurants.insert(candidate.name);
            return candidate;
        }
    }
}

fn activity_slot(
    time: &str,
    poi: &PointOfInterest,
    description: String,
    duration: &str,
    cost: &str,
) -> ScheduledActivity {
    ScheduledActivity {
        time: time.to_string(),
        name: poi.name.to_string(),
        description,
        location: ActivityLocation {
            address: poi.address.to_string(),
            kind: poi.kind.to_string(),
            cuisine: None,
            price_range: None,
        },
        estimated_duration: duration.to_string(),
        estimated_cost: cost.to_string(),
    }
}

fn meal_slot(
    time: &str,
    meal: &str,
    restaurant: &Restaurant,
    duration: &str,
    cost: &str,
) -> ScheduledActivity {
    ScheduledActivity {
        time: time.to_string(),
        name: restaurant.name.to_string(),
        description: format!(
            "{} at {}, serving {} cuisine.",
            meal, restaurant.name, restaurant.cuisine
        ),
        location: ActivityLocation {
            address: restaurant.address.to_string(),
            kind: "restaurant".to_string(),
            cuisine: Some(restaurant.cuisine.to_string()),
            price_range: Some(restaurant.price_range.to_string()),
        },
        estimated_duration: duration.to_string(),
        estimated_cost: cost.to_string(),
    }
}
