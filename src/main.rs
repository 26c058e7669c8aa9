// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SilverKaki command-line driver
//!
//! Thin UI collaborator over the engagement core: selects profiles, lists
//! and joins activities, records attendance/feedback/health readings, and
//! shows points, recommendations, notifications, and the forum.

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use silverkaki::clock::{Clock, SystemClock};
use silverkaki::config::Config;
use silverkaki::ids::UuidIdGen;
use silverkaki::models::{ActivityWindow, BloodSugarKind, User};
use silverkaki::seed::seed_demo_data;
use silverkaki::services::{fall_risk, RegistrationOutcome};
use silverkaki::store::{EntityStore, JsonFileStore};
use silverkaki::{time_utils, AppServices};

#[derive(Parser)]
#[command(name = "silverkaki")]
#[command(about = "Community engagement for active-ageing centres", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed demo users, activities, and forum posts
    Seed,
    /// List member profiles
    Users,
    /// Select the current profile
    Login { user_id: String },
    /// Clear the current profile
    Logout,
    /// Show the current profile
    Whoami,
    /// List activities for the coming week
    Activities {
        /// Only this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Activities matching your interests, filtered for safety
    Recommend,
    /// Join an activity
    Register {
        activity_id: String,
        /// Confirm joining an activity above your usual intensity
        #[arg(long)]
        confirmed: bool,
    },
    /// Leave an activity you joined
    Unregister { activity_id: String },
    /// Confirm attendance at an activity
    Attend { activity_id: String },
    /// Submit the post-activity survey
    Feedback {
        activity_id: String,
        /// Enjoyment score, 1-5
        #[arg(long)]
        enjoyment: u8,
        #[arg(long)]
        join_again: bool,
        #[arg(long, default_value = "")]
        comments: String,
    },
    /// Show point balance and voucher progress
    Points,
    /// Redeem a reward voucher (200 points)
    Redeem,
    /// Show your fall-risk tier
    Risk,
    /// Show notifications
    Notifications,
    /// Mark a notification as read
    Read { notification_id: String },
    /// Record a blood pressure reading
    Bp {
        systolic: u32,
        diastolic: u32,
        #[arg(long)]
        pulse: Option<u32>,
    },
    /// Record a blood sugar reading (mmol/L)
    Sugar {
        level: f64,
        /// Reading taken after a meal rather than fasting
        #[arg(long)]
        after_meal: bool,
    },
    /// Record a weight reading (kg)
    Weight { kg: f64 },
    /// List forum posts
    Forum {
        #[arg(long)]
        category: Option<String>,
    },
    /// Create a forum post
    Post {
        #[arg(long)]
        category: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Reply to a forum post
    Reply {
        post_id: String,
        #[arg(long)]
        content: String,
    },
    /// Like (or unlike) a forum post
    Like { post_id: String },
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let backend = JsonFileStore::open(&config.data_dir)
        .with_context(|| format!("failed to open store at {}", config.data_dir.display()))?;
    let store = EntityStore::new(Arc::new(backend));
    let clock = Arc::new(SystemClock);
    let ids = Arc::new(UuidIdGen);

    if config.auto_seed && !matches!(cli.command, Commands::Seed) {
        seed_demo_data(&store, clock.as_ref(), ids.as_ref())?;
    }

    let services = AppServices::new(store.clone(), clock.clone(), ids);

    match cli.command {
        Commands::Seed => {
            let summary = seed_demo_data(&store, clock.as_ref(), &UuidIdGen)?;
            if summary.is_empty() {
                println!("Store already seeded.");
            } else {
                println!(
                    "Seeded {} activities, {} users, {} registrations, {} forum posts.",
                    summary.activities, summary.users, summary.registrations, summary.forum_posts
                );
            }
        }
        Commands::Users => {
            for user in services.profiles.list_users()? {
                println!(
                    "{}  {} ({:?} activity, {} points)",
                    user.id, user.name, user.activity_level, user.points
                );
            }
        }
        Commands::Login { user_id } => {
            let user = services.profiles.switch_user(&user_id)?;
            println!("Welcome back, {}!", user.name);
        }
        Commands::Logout => {
            services.profiles.logout()?;
            println!("Logged out.");
        }
        Commands::Whoami => match services.profiles.current_user()? {
            Some(user) => println!("{} ({})", user.name, user.id),
            None => println!("No profile selected. Run `silverkaki users` then `login <id>`."),
        },
        Commands::Activities { date } => {
            let user = current_user(&services)?;
            let today = clock.today();
            let mut activities: Vec<_> = store
                .list_activities()?
                .into_iter()
                .filter(|a| match date {
                    Some(d) => a.date == d,
                    None => a.date >= today && a.date <= today + Duration::days(7),
                })
                .collect();
            activities.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));

            for activity in activities {
                let window = activity.window(today, clock.time_of_day());
                let joined = store
                    .find_registration(&user.id, &activity.id)?
                    .map(|_| " [joined]")
                    .unwrap_or("");
                let status = match window {
                    ActivityWindow::Upcoming => "",
                    ActivityWindow::InProgress => " (in progress)",
                    ActivityWindow::Ended => " (ended)",
                };
                println!(
                    "{}  {} {}-{}  {}{}{}",
                    activity.id, activity.date, activity.time, activity.end_time, activity.name,
                    status, joined
                );
            }
        }
        Commands::Recommend => {
            let user = current_user(&services)?;
            let mut picks = services.recommendations.recommend(&user.id)?;
            picks.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
            if picks.is_empty() {
                println!("No matching activities right now.");
            }
            for activity in picks {
                println!(
                    "{}  {} {}  {} ({:?}, {:?})",
                    activity.id,
                    activity.date,
                    activity.time,
                    activity.name,
                    activity.exertion,
                    activity.intensity
                );
            }
        }
        Commands::Register {
            activity_id,
            confirmed,
        } => {
            let user = current_user(&services)?;
            if confirmed {
                services.lifecycle.register_confirmed(&user.id, &activity_id)?;
                println!("Joined {}.", activity_id);
            } else {
                match services.lifecycle.register(&user.id, &activity_id)? {
                    RegistrationOutcome::Registered(_) => println!("Joined {}.", activity_id),
                    RegistrationOutcome::NeedsConfirmation {
                        intensity,
                        user_level,
                        ..
                    } => println!(
                        "This is a {:?}-intensity activity and your level is {:?}. \
                         Re-run with --confirmed if you are sure.",
                        intensity, user_level
                    ),
                }
            }
        }
        Commands::Unregister { activity_id } => {
            let user = current_user(&services)?;
            services.lifecycle.unregister(&user.id, &activity_id)?;
            println!("Left {}.", activity_id);
        }
        Commands::Attend { activity_id } => {
            let user = current_user(&services)?;
            services.lifecycle.confirm_attendance(&user.id, &activity_id)?;
            println!("Attendance confirmed. +10 points!");
        }
        Commands::Feedback {
            activity_id,
            enjoyment,
            join_again,
            comments,
        } => {
            let user = current_user(&services)?;
            services
                .lifecycle
                .submit_feedback(&user.id, &activity_id, enjoyment, join_again, comments)?;
            println!("Thanks for the feedback! +20 points!");
        }
        Commands::Points => {
            let user = current_user(&services)?;
            let balance = services.rewards.balance(&user.id)?;
            println!("{} points ({} / 200 towards a voucher)", balance, balance.min(200));
            if let Some(voucher) = &user.last_voucher {
                println!(
                    "Last voucher: {} redeemed on {}",
                    voucher.reference, voucher.redeemed_on
                );
            }
            let pending = services.lifecycle.pending_feedback(&user.id)?;
            for registration in pending {
                println!(
                    "Pending survey for {} (+20 points)",
                    registration.activity_id
                );
            }
        }
        Commands::Redeem => {
            let user = current_user(&services)?;
            let voucher = services.rewards.redeem_voucher(&user.id)?;
            println!(
                "Voucher {} redeemed on {}. Show this reference at the counter.",
                voucher.reference, voucher.redeemed_on
            );
        }
        Commands::Risk => {
            let user = current_user(&services)?;
            println!("Fall-risk tier: {}", fall_risk(&user));
        }
        Commands::Notifications => {
            let user = current_user(&services)?;
            for notification in services.notifications.list_for(&user.id)? {
                let marker = if notification.read { " " } else { "*" };
                println!(
                    "{} {}  {}  {}: {}",
                    marker,
                    notification.id,
                    time_utils::format_utc_rfc3339(notification.created_at),
                    notification.title,
                    notification.message
                );
            }
        }
        Commands::Read { notification_id } => {
            services.notifications.mark_read(&notification_id)?;
            println!("Marked as read.");
        }
        Commands::Bp {
            systolic,
            diastolic,
            pulse,
        } => {
            let user = current_user(&services)?;
            services
                .health
                .add_blood_pressure(&user.id, systolic, diastolic, pulse)?;
            println!("Recorded {}/{}.", systolic, diastolic);
        }
        Commands::Sugar { level, after_meal } => {
            let user = current_user(&services)?;
            let kind = if after_meal {
                BloodSugarKind::AfterMeal
            } else {
                BloodSugarKind::Fasting
            };
            services.health.add_blood_sugar(&user.id, level, kind)?;
            println!("Recorded {} mmol/L.", level);
        }
        Commands::Weight { kg } => {
            let user = current_user(&services)?;
            services.health.add_weight(&user.id, kg)?;
            println!("Recorded {} kg.", kg);
        }
        Commands::Forum { category } => {
            for post in services.forum.list_posts(category.as_deref())? {
                println!(
                    "{}  [{}] {} ({} likes, {} replies)",
                    post.id,
                    post.category,
                    post.title,
                    post.likes,
                    post.replies.len()
                );
            }
        }
        Commands::Post {
            category,
            title,
            content,
        } => {
            let user = current_user(&services)?;
            let post = services
                .forum
                .create_post(&user.id, &category, &title, &content)?;
            println!("Posted {}.", post.id);
        }
        Commands::Reply { post_id, content } => {
            let user = current_user(&services)?;
            services.forum.add_reply(&post_id, &user.id, &content)?;
            println!("Reply added.");
        }
        Commands::Like { post_id } => {
            let user = current_user(&services)?;
            let likes = services.forum.toggle_like(&post_id, &user.id)?;
            println!("{} likes.", likes);
        }
    }

    Ok(())
}

/// Resolve the selected profile or explain how to pick one.
fn current_user(services: &AppServices) -> anyhow::Result<User> {
    services
        .profiles
        .current_user()?
        .context("no profile selected; run `silverkaki users` then `silverkaki login <id>`")
}

/// Initialize logging; verbosity is controlled via RUST_LOG.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("silverkaki=info".parse().unwrap()),
        )
        .with_target(false)
        .init();
}
