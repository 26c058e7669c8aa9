// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! First-run demo seeding.
//!
//! Seeding is the collaborator's responsibility, not the store's: each
//! collection is only written if it has never been initialized. The catalog
//! is generated from a weekly schedule spanning one week back (so there is a
//! past occurrence to demo the feedback flow) through thirty days ahead.
//! Everything is deterministic; participant counts derive from the date.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::clock::Clock;
use crate::error::Result;
use crate::ids::IdGen;
use crate::models::{
    Activity, ActivityLevel, BloodPressureReading, BloodSugarKind, BloodSugarReading, ExertionType,
    ForumPost, ForumReply, Gender, Intensity, Registration, RegistrationState, User, WeightReading,
};
use crate::store::EntityStore;
use crate::time_utils::parse_schedule_time;

/// Catalog range relative to today.
pub const SEED_DAYS_BACK: i64 = 7;
pub const SEED_DAYS_AHEAD: i64 = 30;

/// What a seeding pass actually wrote.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub activities: usize,
    pub users: usize,
    pub registrations: usize,
    pub forum_posts: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        *self == SeedSummary::default()
    }
}

/// One recurring slot of the weekly schedule.
struct Slot {
    slug: &'static str,
    name: &'static str,
    category: &'static str,
    exertion: ExertionType,
    intensity: Intensity,
    start: &'static str,
    end: &'static str,
    location: &'static str,
    description: &'static str,
    max_participants: u32,
    instructor: Option<&'static str>,
    /// Empty means daily
    weekdays: &'static [Weekday],
}

use Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};

const SCHEDULE: &[Slot] = &[
    Slot {
        slug: "tai-chi",
        name: "Morning Tai Chi",
        category: "tai-chi",
        exertion: ExertionType::Stand,
        intensity: Intensity::Moderate,
        start: "09:00",
        end: "11:00",
        location: "ntuc_aac",
        description: "Gentle Tai Chi movements to improve balance and flexibility",
        max_participants: 20,
        instructor: Some("Master Lee"),
        weekdays: &[Mon, Wed, Fri, Sat],
    },
    Slot {
        slug: "art",
        name: "Art & Craft Session",
        category: "art",
        exertion: ExertionType::Sit,
        intensity: Intensity::Low,
        start: "10:30",
        end: "12:30",
        location: "care_corner",
        description: "Express your creativity with painting and crafts",
        max_participants: 15,
        instructor: Some("Ms. Tan"),
        weekdays: &[Tue, Thu],
    },
    Slot {
        slug: "chair-yoga",
        name: "Chair Yoga",
        category: "yoga",
        exertion: ExertionType::Sit,
        intensity: Intensity::Low,
        start: "11:00",
        end: "13:00",
        location: "ntuc_daycare",
        description: "Gentle yoga stretches done while seated",
        max_participants: 20,
        instructor: Some("Coach Mei"),
        weekdays: &[Mon, Wed, Fri],
    },
    Slot {
        slug: "karaoke",
        name: "Karaoke Session",
        category: "singing",
        exertion: ExertionType::Sit,
        intensity: Intensity::Low,
        start: "14:00",
        end: "16:00",
        location: "sunlove_marsiling",
        description: "Sing your favorite oldies with friends!",
        max_participants: 25,
        instructor: None,
        weekdays: &[Tue, Sat],
    },
    Slot {
        slug: "games",
        name: "Board Games & Mahjong",
        category: "games",
        exertion: ExertionType::Sit,
        intensity: Intensity::Low,
        start: "15:00",
        end: "17:00",
        location: "care_corner",
        description: "Play mahjong, chess, and other games with friends",
        max_participants: 30,
        instructor: None,
        weekdays: &[],
    },
    Slot {
        slug: "tea",
        name: "Morning Tea Social",
        category: "social",
        exertion: ExertionType::Sit,
        intensity: Intensity::Low,
        start: "09:30",
        end: "10:30",
        location: "care_corner",
        description: "Enjoy tea, coffee and snacks with friends!",
        max_participants: 40,
        instructor: None,
        weekdays: &[],
    },
    Slot {
        slug: "simple-exercise",
        name: "Simple Stretching",
        category: "exercise",
        exertion: ExertionType::Sit,
        intensity: Intensity::Low,
        start: "11:00",
        end: "11:45",
        location: "ntuc_aac",
        description: "Gentle seated stretches for flexibility",
        max_participants: 25,
        instructor: Some("Coach Mei"),
        weekdays: &[],
    },
    Slot {
        slug: "health-talk",
        name: "Health Talk",
        category: "education",
        exertion: ExertionType::Sit,
        intensity: Intensity::Low,
        start: "14:30",
        end: "16:30",
        location: "ntuc_aac",
        description: "Learn about managing common health conditions",
        max_participants: 40,
        instructor: Some("Dr. Wong"),
        weekdays: &[Thu],
    },
    Slot {
        slug: "strength",
        name: "Gentle Strength Training",
        category: "exercise",
        exertion: ExertionType::Stand,
        intensity: Intensity::Moderate,
        start: "10:00",
        end: "12:00",
        location: "ntuc_daycare",
        description: "Build strength with resistance bands and light weights",
        max_participants: 15,
        instructor: Some("Coach Raju"),
        weekdays: &[Tue, Thu, Sat],
    },
    Slot {
        slug: "cooking",
        name: "Healthy Cooking Class",
        category: "cooking",
        exertion: ExertionType::Stand,
        intensity: Intensity::Moderate,
        start: "11:00",
        end: "13:00",
        location: "sunlove_marsiling",
        description: "Learn to cook nutritious meals for seniors",
        max_participants: 12,
        instructor: Some("Chef Mary"),
        weekdays: &[Fri],
    },
    Slot {
        slug: "walk",
        name: "Garden Walk",
        category: "walking",
        exertion: ExertionType::Walk,
        intensity: Intensity::High,
        start: "08:00",
        end: "10:00",
        location: "care_corner",
        description: "Morning walk around the garden with exercise stops",
        max_participants: 15,
        instructor: Some("Mr. Ahmad"),
        weekdays: &[Wed, Sun],
    },
    Slot {
        slug: "dance",
        name: "Line Dancing",
        category: "dance",
        exertion: ExertionType::Walk,
        intensity: Intensity::High,
        start: "16:00",
        end: "18:00",
        location: "sunlove_marsiling",
        description: "Fun dance moves in a group - no partner needed!",
        max_participants: 25,
        instructor: Some("Ms. Lim"),
        weekdays: &[Mon, Fri],
    },
];

/// Seed every uninitialized collection; returns what was written.
pub fn seed_demo_data(
    store: &EntityStore,
    clock: &dyn Clock,
    ids: &dyn IdGen,
) -> Result<SeedSummary> {
    let today = clock.today();
    let mut summary = SeedSummary::default();

    if store.list_activities()?.is_empty() {
        let catalog = generate_catalog(today)?;
        summary.activities = catalog.len();
        store.set_activities(&catalog)?;
    }

    if store.list_users()?.is_empty() {
        let users = demo_users(clock);
        summary.users = users.len();
        for user in &users {
            store.upsert_user(user)?;
        }
    }

    if store.list_registrations()?.is_empty() {
        summary.registrations = seed_demo_registration(store, clock, ids)?;
    }

    if store.list_forum_posts()?.is_empty() {
        let posts = demo_forum_posts(clock, ids);
        summary.forum_posts = posts.len();
        for post in &posts {
            store.upsert_forum_post(post)?;
        }
    }

    if !summary.is_empty() {
        tracing::info!(
            activities = summary.activities,
            users = summary.users,
            registrations = summary.registrations,
            forum_posts = summary.forum_posts,
            "Demo data seeded"
        );
    }
    Ok(summary)
}

/// Generate the dated catalog for `today - SEED_DAYS_BACK ..= today + SEED_DAYS_AHEAD`.
pub fn generate_catalog(today: NaiveDate) -> Result<Vec<Activity>> {
    let mut activities = Vec::new();
    let mut date = today - Duration::days(SEED_DAYS_BACK);
    let last = today + Duration::days(SEED_DAYS_AHEAD);

    while date <= last {
        for (index, slot) in SCHEDULE.iter().enumerate() {
            if !slot.weekdays.is_empty() && !slot.weekdays.contains(&date.weekday()) {
                continue;
            }
            let mut activity = Activity::new(
                format!("{}-{}", slot.slug, date),
                slot.name.to_string(),
                slot.category.to_string(),
                slot.exertion,
                slot.intensity,
                date,
                time_of(slot.start),
                time_of(slot.end),
                slot.location.to_string(),
                slot.description.to_string(),
                slot.max_participants,
                slot.instructor.map(String::from),
            )?;
            activity.current_participants = (date.day() + index as u32) % slot.max_participants;
            activities.push(activity);
        }
        date += Duration::days(1);
    }

    Ok(activities)
}

fn time_of(value: &str) -> NaiveTime {
    parse_schedule_time(value).expect("schedule times are valid")
}

fn demo_users(clock: &dyn Clock) -> Vec<User> {
    let now = clock.now();
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);

    let mut tan = User::new(
        "user_001".to_string(),
        "Uncle Tan".to_string(),
        Gender::Male,
        ActivityLevel::Moderate,
        true,
        vec![
            "tai-chi".to_string(),
            "art".to_string(),
            "singing".to_string(),
        ],
        NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date"),
    );
    tan.blood_pressure = vec![
        BloodPressureReading {
            recorded_at: now,
            systolic: 120,
            diastolic: 80,
            pulse: Some(72),
        },
        BloodPressureReading {
            recorded_at: yesterday,
            systolic: 125,
            diastolic: 82,
            pulse: Some(75),
        },
    ];
    tan.blood_sugar = vec![BloodSugarReading {
        recorded_at: now,
        level: 5.8,
        kind: BloodSugarKind::Fasting,
    }];
    tan.weight = vec![WeightReading {
        recorded_at: two_days_ago,
        kg: 68.0,
    }];
    tan.hospital_visits = 1;
    tan.points = 150;
    tan.badges = vec![
        "first_timer".to_string(),
        "active_star".to_string(),
        "social_bee".to_string(),
    ];

    let mut mary = User::new(
        "user_002".to_string(),
        "Auntie Mary".to_string(),
        Gender::Female,
        ActivityLevel::High,
        false,
        vec![
            "dance".to_string(),
            "exercise".to_string(),
            "cooking".to_string(),
        ],
        NaiveDate::from_ymd_opt(2025, 8, 15).expect("valid date"),
    );
    mary.blood_pressure = vec![BloodPressureReading {
        recorded_at: now,
        systolic: 115,
        diastolic: 75,
        pulse: Some(68),
    }];
    mary.weight = vec![WeightReading {
        recorded_at: now,
        kg: 55.0,
    }];
    mary.points = 280;
    mary.badges = vec![
        "first_timer".to_string(),
        "active_star".to_string(),
        "social_bee".to_string(),
        "super_active".to_string(),
    ];

    let mut lim = User::new(
        "user_003".to_string(),
        "Uncle Lim".to_string(),
        Gender::Male,
        ActivityLevel::Low,
        true,
        vec![
            "games".to_string(),
            "singing".to_string(),
            "education".to_string(),
        ],
        NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date"),
    );
    lim.blood_pressure = vec![BloodPressureReading {
        recorded_at: now,
        systolic: 140,
        diastolic: 90,
        pulse: Some(78),
    }];
    lim.blood_sugar = vec![BloodSugarReading {
        recorded_at: now,
        level: 8.5,
        kind: BloodSugarKind::Fasting,
    }];
    lim.weight = vec![WeightReading {
        recorded_at: now,
        kg: 75.0,
    }];
    lim.hospital_visits = 2;
    lim.points = 80;

    vec![tan, mary, lim]
}

/// One pre-attended registration for yesterday's board games, so a pending
/// feedback survey is visible on first run.
fn seed_demo_registration(
    store: &EntityStore,
    clock: &dyn Clock,
    ids: &dyn IdGen,
) -> Result<usize> {
    let yesterday = clock.today() - Duration::days(1);
    let activity_id = format!("games-{}", yesterday);
    if store.get_activity(&activity_id)?.is_none() {
        return Ok(0);
    }

    let mut registration = Registration::new(
        ids.entity_id("reg"),
        "user_001".to_string(),
        activity_id,
        clock.now() - Duration::days(2),
    );
    registration.state = RegistrationState::FeedbackUnlocked;
    registration.attendance_time = Some(clock.now() - Duration::days(1));
    registration.points_awarded = true;
    store.upsert_registration(&registration)?;
    Ok(1)
}

fn demo_forum_posts(clock: &dyn Clock, ids: &dyn IdGen) -> Vec<ForumPost> {
    let now = clock.now();

    let mut sugar_post = ForumPost::new(
        ids.entity_id("post"),
        "user_002".to_string(),
        "diabetes".to_string(),
        "Tips for managing sugar levels after meals".to_string(),
        "I found that taking a 15-minute walk after meals really helps keep my blood sugar stable. Anyone else tried this?".to_string(),
        now - Duration::hours(1),
    );
    sugar_post.likes = 2;
    sugar_post.liked_by = vec!["user_001".to_string(), "user_003".to_string()];
    sugar_post.replies = vec![ForumReply {
        id: ids.entity_id("reply"),
        user_id: "user_001".to_string(),
        content: "Yes! My doctor recommended the same thing. Even 10 minutes helps!".to_string(),
        created_at: now - Duration::minutes(30),
        likes: 5,
    }];

    let mut bp_post = ForumPost::new(
        ids.entity_id("post"),
        "user_003".to_string(),
        "heart".to_string(),
        "High blood pressure - what works for you?".to_string(),
        "My BP has been a bit high lately (140/90). Besides medication, what lifestyle changes helped you?".to_string(),
        now - Duration::days(1),
    );
    bp_post.likes = 1;
    bp_post.liked_by = vec!["user_002".to_string()];
    bp_post.replies = vec![
        ForumReply {
            id: ids.entity_id("reply"),
            user_id: "user_002".to_string(),
            content: "Reducing salt made a big difference for me. Also doing Tai Chi at the centre helps with stress!".to_string(),
            created_at: now - Duration::hours(12),
            likes: 6,
        },
        ForumReply {
            id: ids.entity_id("reply"),
            user_id: "user_001".to_string(),
            content: "Sleep is very important! I noticed my BP is higher when I don't sleep well.".to_string(),
            created_at: now - Duration::hours(6),
            likes: 4,
        },
    ];

    let chair_post = ForumPost::new(
        ids.entity_id("post"),
        "user_001".to_string(),
        "exercise".to_string(),
        "Chair exercises for those with knee problems".to_string(),
        "For those of us with bad knees, Chair Yoga is excellent! You can exercise without straining your joints. Highly recommend!".to_string(),
        now - Duration::days(2),
    );

    vec![sugar_post, bp_post, chair_post]
}
