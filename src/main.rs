use anyhow::Result;
use campus_study_tracker::{
    models::*,
    services::{
        improvement::generate_improvement_areas, step_planner::StepPlanner,
        study_tracker::StudyTracker,
    },
};
use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campus-study-tracker")]
#[command(about = "A lightweight Rust client for campus study tracking and goal journeys")]
#[command(version = "0.3.1")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Data directory override (defaults to the platform data dir)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show about information including version, author, and contributors
    #[arg(long)]
    about: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up your profile and generate your goal journey
    Onboard {
        /// Your name
        #[arg(long)]
        name: String,
        /// Free-text goal, e.g. "Become a software engineer at Google"
        #[arg(long)]
        goal: String,
        /// Comma-separated skill labels
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
        /// LinkedIn profile URL
        #[arg(long)]
        linkedin: Option<String>,
    },
    /// Record a completed study session
    Record {
        /// Session length in minutes (sessions under 1 minute are dropped)
        minutes: u64,
        /// Focus score 0-100
        #[arg(short, long, default_value = "70")]
        focus: u8,
        /// What you studied
        #[arg(short, long)]
        topic: Option<String>,
    },
    /// Show profile, streak and achievement summary
    Status,
    /// Show study analytics for the trailing week
    Analytics,
    /// Show the goal journey steps
    Journey,
    /// Mark a journey step complete (or undo it)
    Complete {
        /// Step id (1-10)
        step: u32,
        /// Mark the step incomplete again
        #[arg(long)]
        undo: bool,
    },
    /// Suggest areas to improve for your goal track
    Areas,
    /// Regenerate the goal journey from your profile
    Regenerate,
    /// Save a classroom note
    SaveNote {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Raw lecture transcription, if any
        #[arg(long, default_value = "")]
        transcription: String,
        /// Comma-separated topic labels
        #[arg(long, value_delimiter = ',')]
        topics: Vec<String>,
    },
    /// List saved classroom notes
    Notes,
    /// Delete all saved state
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.about {
        show_about();
        return Ok(());
    }

    // Initialize logging
    if cli.verbose {
        // Log to file when verbose
        use std::fs::OpenOptions;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open("debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .init();
    } else {
        // Normal logging to stderr for info/warn/error
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    // Setup data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campus-study-tracker")
    });
    std::fs::create_dir_all(&data_dir)?;

    let mut tracker = StudyTracker::new(data_dir.join("user_state.json"));
    tracker.load().await?;
    debug!("Loaded state from {:?}", data_dir);

    // No generative backend is wired into the CLI build; the planner degrades
    // to the local templates, which is the guaranteed fallback path anyway
    let planner = StepPlanner::local();

    match cli.command {
        Some(Commands::Onboard {
            name,
            goal,
            skills,
            email,
            linkedin,
        }) => {
            let profile = UserProfile {
                name,
                goal,
                skills,
                linkedin,
            };
            tracker.onboard(profile, email, &planner).await?;
            println!("🎯 Profile saved and goal journey planned!");
            show_journey(&tracker);
        }
        Some(Commands::Record {
            minutes,
            focus,
            topic,
        }) => {
            match tracker
                .record_session(minutes * 60, focus, topic)
                .await?
            {
                Some(session) => {
                    println!(
                        "✅ Recorded {} minute session (focus {})",
                        session.duration_minutes, session.focus_score
                    );
                    let analytics = tracker.state().analytics.clone();
                    println!(
                        "🔥 Current streak: {} day(s), total study time: {} minutes",
                        analytics.current_streak, analytics.total_study_minutes
                    );
                }
                None => {
                    println!("⏱️  Sessions under a minute are not recorded");
                }
            }
        }
        Some(Commands::Status) | None => {
            show_status(&tracker);
        }
        Some(Commands::Analytics) => {
            show_analytics(&tracker);
        }
        Some(Commands::Journey) => {
            show_journey(&tracker);
        }
        Some(Commands::Complete { step, undo }) => {
            if tracker.set_step_completed(step, !undo).await? {
                let verb = if undo { "reopened" } else { "completed" };
                println!("✅ Step {step} {verb}");
                show_journey(&tracker);
            } else {
                println!("❌ No step with id {step}");
            }
        }
        Some(Commands::Areas) => {
            show_areas(&tracker);
        }
        Some(Commands::Regenerate) => {
            if tracker.regenerate_steps(&planner).await? {
                println!("🎯 Goal journey regenerated");
                show_journey(&tracker);
            } else {
                println!("❌ No profile yet - run 'onboard' first");
            }
        }
        Some(Commands::SaveNote {
            title,
            content,
            transcription,
            topics,
        }) => {
            let note = tracker
                .save_note(title, content, transcription, topics)
                .await?;
            println!("📝 Saved note \"{}\"", note.title);
        }
        Some(Commands::Notes) => {
            show_notes(&tracker);
        }
        Some(Commands::Reset { yes }) => {
            if yes {
                tracker.reset().await?;
                println!("🗑️  All saved state deleted");
            } else {
                println!("This deletes your profile, sessions and notes.");
                println!("Re-run with --yes to confirm.");
            }
        }
    }

    Ok(())
}

fn show_status(tracker: &StudyTracker) {
    let state = tracker.state();

    match &state.profile {
        Some(profile) => {
            println!("📊 {} - {}", profile.name, profile.goal);
            if !profile.skills.is_empty() {
                println!("  Skills: {}", profile.skills.join(", "));
            }
        }
        None => {
            println!("❌ No profile yet - run 'onboard' to get started");
            return;
        }
    }

    let analytics = tracker.analytics();
    println!("  Total study time: {} minutes", analytics.total_study_minutes);
    println!("  Average focus: {}%", analytics.average_focus_score);
    println!(
        "  Streak: {} day(s) (longest {})",
        analytics.current_streak, analytics.longest_streak
    );

    if let Some(last) = state.study_sessions.last() {
        println!(
            "  Last session: {}",
            humantime::format_rfc3339(last.date.into())
        );
    }

    println!(
        "🏆 Achievements ({}/{}):",
        analytics.achievements_unlocked.len(),
        ACHIEVEMENTS.len()
    );
    for achievement in ACHIEVEMENTS {
        let unlocked = analytics
            .achievements_unlocked
            .iter()
            .any(|id| id == achievement.id);
        let marker = if unlocked { achievement.icon } else { "🔒" };
        println!("  {} {} - {}", marker, achievement.title, achievement.description);
    }
}

fn show_analytics(tracker: &StudyTracker) {
    let analytics = tracker.analytics();

    if analytics.total_study_minutes == 0 {
        println!("📊 No study sessions recorded yet");
        return;
    }

    println!("📊 Weekly study minutes:");
    const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let max_minutes = analytics.weekly_minutes.iter().copied().max().unwrap_or(0);

    for (label, minutes) in DAY_LABELS.iter().zip(analytics.weekly_minutes.iter()) {
        let bar_len = if max_minutes > 0 {
            (minutes * 30 / max_minutes.max(1)) as usize
        } else {
            0
        };
        println!("  {label} {:>4} {}", minutes, "█".repeat(bar_len));
    }

    println!();
    println!("  Total: {} minutes", analytics.total_study_minutes);
    println!("  Average focus: {}%", analytics.average_focus_score);
    println!(
        "  🔥 Streak: {} day(s), longest {}",
        analytics.current_streak, analytics.longest_streak
    );
}

fn show_journey(tracker: &StudyTracker) {
    let steps = &tracker.state().goal_steps;

    if steps.is_empty() {
        println!("❌ No goal journey yet - run 'onboard' first");
        return;
    }

    println!("🗺️  Goal journey:");
    for step in steps {
        let marker = if step.completed {
            "✅"
        } else if step.current {
            "👉"
        } else {
            "  "
        };
        println!(
            "  {} {:>2}. {} ({}, ~{} days)",
            marker, step.id, step.title, step.deadline, step.estimated_days
        );
        println!("       {}", step.description);
    }

    let done = steps.iter().filter(|s| s.completed).count();
    println!("  Progress: {done}/{} steps", steps.len());
}

fn show_areas(tracker: &StudyTracker) {
    let Some(profile) = &tracker.state().profile else {
        println!("❌ No profile yet - run 'onboard' first");
        return;
    };

    let mut rng = rand::thread_rng();
    let areas = generate_improvement_areas(&profile.goal, &mut rng);

    println!("📈 Areas to improve:");
    for area in areas {
        let trend = match area.trend {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        };
        println!(
            "  {} {} [{} priority] {} -> {}",
            trend, area.skill, area.priority, area.current_level, area.target_level
        );
        println!("       {}", area.recommendation);
    }
}

fn show_notes(tracker: &StudyTracker) {
    let notes = &tracker.state().classroom_notes;

    if notes.is_empty() {
        println!("📝 No classroom notes saved");
        return;
    }

    println!("📝 Classroom notes ({}):", notes.len());
    for note in notes {
        println!(
            "  {} - {}",
            humantime::format_rfc3339(note.created_at.into()),
            note.title
        );
        if !note.topics.is_empty() {
            println!("       Topics: {}", note.topics.join(", "));
        }
    }
}

/// Display about information including version, author, and contributors
fn show_about() {
    use colored::Colorize;

    println!("{}", "🎓 Campus Study Tracker".bright_cyan().bold());
    println!();
    println!("{}", "📋 Version Information:".bright_yellow().bold());
    println!("  Version: {}", "v0.3.1".bright_green());
    println!("  Name: {}", "campus-study-tracker".bright_white());
    println!("  Description: A lightweight Rust client for campus study tracking and goal journeys");
    println!();

    println!("{}", "👨‍💻 Author:".bright_yellow().bold());
    println!("  Chris Phillips, Email: {}", "tools-campus-study-tracker@adiuco.com".bright_blue());
    println!();

    println!("{}", "💡 Usage:".bright_green().bold());
    println!("  campus-study-tracker onboard --name Ada --goal \"Become a software engineer\" --skills React,Docker");
    println!("  campus-study-tracker record 25 --focus 85 --topic algorithms");
    println!("  campus-study-tracker analytics");
}
