//! Static career and wellness content
//!
//! Canned but curated: study roadmaps, resume and portfolio guidance,
//! breathing exercises, per-mood coping tips, prompts, quotes. Random
//! picks use `rand`; nothing here touches the store.

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::Mood;

// --- DSA roadmap ---

struct DsaTopic {
    name: &'static str,
    difficulty: &'static str,
    problems: u32,
}

const DSA_TOPICS: &[DsaTopic] = &[
    DsaTopic { name: "Arrays & Strings", difficulty: "Easy", problems: 15 },
    DsaTopic { name: "Hashing & Two Pointers", difficulty: "Easy", problems: 10 },
    DsaTopic { name: "Linked Lists", difficulty: "Easy-Medium", problems: 10 },
    DsaTopic { name: "Stacks & Queues", difficulty: "Medium", problems: 10 },
    DsaTopic { name: "Recursion & Backtracking", difficulty: "Medium", problems: 12 },
    DsaTopic { name: "Binary Trees & BST", difficulty: "Medium", problems: 15 },
    DsaTopic { name: "Graphs (BFS/DFS)", difficulty: "Medium-Hard", problems: 15 },
    DsaTopic { name: "Dynamic Programming (1D)", difficulty: "Medium-Hard", problems: 15 },
    DsaTopic { name: "Dynamic Programming (2D)", difficulty: "Hard", problems: 10 },
    DsaTopic { name: "Greedy Algorithms", difficulty: "Medium", problems: 10 },
    DsaTopic { name: "Heaps & Priority Queues", difficulty: "Medium", problems: 8 },
    DsaTopic { name: "Tries & Segment Trees", difficulty: "Hard", problems: 8 },
    DsaTopic { name: "Sliding Window & Intervals", difficulty: "Medium", problems: 10 },
    DsaTopic { name: "Bit Manipulation", difficulty: "Medium", problems: 6 },
    DsaTopic { name: "Mixed Practice & Mock Interviews", difficulty: "Mixed", problems: 20 },
];

/// One week of a study plan
#[derive(Debug, Clone, Serialize)]
pub struct StudyWeek {
    pub week: u32,
    pub topics: Vec<String>,
    pub problems: u32,
}

/// Distribute the topic pool over `weeks` study weeks (clamped to 1-16)
///
/// Early weeks get an even share; the final week absorbs the remainder.
pub fn dsa_roadmap(weeks: u32) -> Vec<StudyWeek> {
    let weeks = weeks.clamp(1, 16) as usize;
    let total = DSA_TOPICS.len();
    let per_week = (total / weeks).max(1);

    let mut plan = Vec::new();
    for week in 1..=weeks {
        let start = (week - 1) * per_week;
        let end = if week < weeks { start + per_week } else { total };
        if start >= total {
            break;
        }
        let slice = &DSA_TOPICS[start..end.min(total)];
        plan.push(StudyWeek {
            week: week as u32,
            topics: slice.iter().map(|t| t.name.to_string()).collect(),
            problems: slice.iter().map(|t| t.problems).sum(),
        });
    }
    plan
}

// --- Resume tips ---

/// Tip lists keyed by category: (category, tips)
pub fn resume_tips() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        (
            "Format",
            &[
                "Keep your resume to 1 page (2 max for 10+ years experience)",
                "Use a clean, ATS-friendly template with consistent formatting",
                "Use reverse chronological order for experience",
                "Save as PDF to preserve formatting across devices",
            ][..],
        ),
        (
            "Content",
            &[
                "Quantify achievements with numbers (e.g. 'Reduced load time by 40%')",
                "Use strong action verbs: Built, Designed, Optimized, Led, Shipped",
                "Mirror keywords from the job description in your resume",
                "Include a concise professional summary (2-3 lines) at the top",
                "List relevant technical skills grouped by category",
            ][..],
        ),
        (
            "Mistakes to avoid",
            &[
                "Don't include a photo, age, or marital status",
                "Remove outdated skills that no longer match your target roles",
                "Avoid generic statements like 'team player' without evidence",
                "Don't list every technology, focus on what's relevant to the role",
            ][..],
        ),
    ]
}

// --- Portfolio ideas ---

const PORTFOLIO_PYTHON: &[&str] = &[
    "Full-stack web app with FastAPI + React (e.g. expense tracker)",
    "Web scraper with a data visualization dashboard",
    "CLI tool for automating daily tasks (file organizer, email sender)",
    "REST API with authentication, rate limiting, and a real database",
    "Machine learning project: sentiment analysis or price predictor",
];

const PORTFOLIO_JAVASCRIPT: &[&str] = &[
    "Real-time chat app with Socket.io and React",
    "E-commerce storefront with Next.js and Stripe integration",
    "Browser extension for productivity (tab manager, bookmark organizer)",
    "Full-stack MERN app with auth (blog platform, task manager)",
    "Interactive data dashboard with D3.js or Chart.js",
];

const PORTFOLIO_JAVA: &[&str] = &[
    "Spring Boot microservices project with Docker",
    "Android app with Room database and Retrofit",
    "Banking system simulation with design patterns",
    "RESTful API with Spring Security and JWT authentication",
    "Distributed system with message queues (RabbitMQ/Kafka)",
];

const PORTFOLIO_DEFAULT: &[&str] = &[
    "Personal portfolio website with a project showcase",
    "REST API with CRUD operations and a database",
    "CLI automation tool for a repetitive task",
    "Real-time application (chat, notifications, live dashboard)",
    "Open-source contribution to a popular project",
];

/// Portfolio project ideas for a tech stack; unknown stacks get the
/// generic list
pub fn portfolio_ideas(tech: &str) -> &'static [&'static str] {
    match tech.trim().to_lowercase().as_str() {
        "python" => PORTFOLIO_PYTHON,
        "javascript" | "js" | "typescript" => PORTFOLIO_JAVASCRIPT,
        "java" => PORTFOLIO_JAVA,
        _ => PORTFOLIO_DEFAULT,
    }
}

// --- Wellness content ---

const QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do. - Steve Jobs",
    "It does not matter how slowly you go as long as you do not stop. - Confucius",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
    "Push yourself, because no one else is going to do it for you.",
    "Great things never come from comfort zones.",
    "Success doesn't just find you. You have to go out and get it.",
    "The harder you work for something, the greater you'll feel when you achieve it.",
    "Wake up with determination. Go to bed with satisfaction.",
    "Do something today that your future self will thank you for.",
    "It's going to be hard, but hard does not mean impossible.",
    "Don't wait for opportunity. Create it.",
    "The key to success is to focus on goals, not obstacles.",
    "You don't have to be perfect to be amazing.",
    "Discipline is choosing between what you want now and what you want most.",
    "Small progress is still progress.",
];

const AFFIRMATIONS: &[&str] = &[
    "I am capable of achieving my goals.",
    "I deserve success and happiness.",
    "I am growing stronger every single day.",
    "My potential is limitless.",
    "I choose to focus on what I can control.",
    "I am worthy of good things happening to me.",
    "Challenges help me grow and become better.",
    "I trust the process and my journey.",
    "I am enough, just as I am right now.",
    "Today I choose joy and gratitude.",
];

const JOURNAL_PROMPTS: &[&str] = &[
    "What's one thing you accomplished today that you're proud of?",
    "What's something you're looking forward to this week?",
    "Write about a challenge you faced recently and what you learned.",
    "What are 3 things you're grateful for right now?",
    "If you could tell your future self one thing, what would it be?",
    "What's one habit you want to build and why?",
    "Describe your ideal day. What does it look like?",
    "What's something weighing on your mind? Write it all out.",
    "Who made a positive impact on your life recently?",
    "What would you do if you knew you couldn't fail?",
];

/// What a breathing exercise is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingNeed {
    Calm,
    Focus,
    Ground,
}

impl std::str::FromStr for BreathingNeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "calm" | "relax" => Ok(Self::Calm),
            "focus" | "pressure" => Ok(Self::Focus),
            "ground" | "anxiety" => Ok(Self::Ground),
            _ => Err(Error::Validation(format!(
                "Unknown breathing need: {}. Use: calm, focus, ground",
                s
            ))),
        }
    }
}

/// A guided breathing exercise
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreathingExercise {
    pub name: &'static str,
    pub steps: &'static [&'static str],
    pub purpose: &'static str,
}

pub fn breathing_exercise(need: BreathingNeed) -> BreathingExercise {
    match need {
        BreathingNeed::Calm => BreathingExercise {
            name: "4-7-8 Relaxing Breath",
            steps: &[
                "Breathe IN through your nose for 4 seconds",
                "HOLD your breath for 7 seconds",
                "Breathe OUT through your mouth for 8 seconds",
                "Repeat 3-4 times",
            ],
            purpose: "Activates the parasympathetic nervous system and calms anxiety.",
        },
        BreathingNeed::Focus => BreathingExercise {
            name: "Box Breathing",
            steps: &[
                "Breathe IN for 4 seconds",
                "HOLD for 4 seconds",
                "Breathe OUT for 4 seconds",
                "HOLD for 4 seconds",
                "Repeat 4-5 times",
            ],
            purpose: "Steadies attention under pressure.",
        },
        BreathingNeed::Ground => BreathingExercise {
            name: "5-4-3-2-1 Grounding",
            steps: &[
                "Breathe deeply and name 5 things you can SEE",
                "Name 4 things you can TOUCH",
                "Name 3 things you can HEAR",
                "Name 2 things you can SMELL",
                "Name 1 thing you can TASTE",
            ],
            purpose: "Anchors you in the present moment.",
        },
    }
}

/// Coping tips for the difficult moods; upbeat moods get none
pub fn stress_tips(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Stressed => &[
            "Take a 10-minute walk outside, movement reduces cortisol",
            "Write down 3 things you're grateful for right now",
            "Break your biggest task into tiny steps and do just the first one",
            "Listen to your favorite song and take deep breaths",
            "Talk to someone you trust about what's on your mind",
        ],
        Mood::Anxious => &[
            "Try the 4-7-8 breathing technique",
            "Write down your worries, getting them out of your head helps",
            "Focus only on the next 30 minutes, not the whole day",
            "Limit caffeine and social media for the rest of today",
            "Remember: anxiety lies. You've handled hard things before.",
        ],
        Mood::Sad | Mood::Low => &[
            "It's okay to feel sad. Don't fight it, acknowledge it",
            "Reach out to one person who makes you feel safe",
            "Do one small thing that usually brings you joy",
            "Go outside and get sunlight for at least 15 minutes",
            "Remember: bad days don't mean a bad life. This will pass.",
        ],
        Mood::Angry => &[
            "Step away from the situation for at least 10 minutes",
            "Write down exactly what made you angry without filtering",
            "Do intense physical exercise to channel the energy",
            "Ask yourself: will this matter in 5 years?",
            "Practice box breathing to cool down",
        ],
        Mood::Tired => &[
            "Take a 20-minute power nap if possible (set an alarm)",
            "Drink water, dehydration causes fatigue more than you'd think",
            "Step outside for fresh air and sunlight",
            "Prioritize only 1-2 essential tasks today, it's okay to rest",
            "Go to bed 1 hour earlier tonight. Sleep debt is real.",
        ],
        Mood::Great | Mood::Good | Mood::Okay => &[],
    }
}

/// A random motivational quote
pub fn motivational_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}

/// A random affirmation
pub fn affirmation() -> &'static str {
    AFFIRMATIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(AFFIRMATIONS[0])
}

/// A random journal prompt
pub fn journal_prompt() -> &'static str {
    JOURNAL_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(JOURNAL_PROMPTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roadmap_covers_every_topic_once() {
        for weeks in [1, 4, 15, 16, 40] {
            let plan = dsa_roadmap(weeks);
            let total: usize = plan.iter().map(|w| w.topics.len()).sum();
            assert_eq!(total, 15, "weeks={}", weeks);
        }
    }

    #[test]
    fn roadmap_clamps_weeks() {
        assert_eq!(dsa_roadmap(0).len(), 1);
        assert!(dsa_roadmap(100).len() <= 16);
    }

    #[test]
    fn roadmap_week_numbers_are_sequential() {
        let plan = dsa_roadmap(4);
        let weeks: Vec<u32> = plan.iter().map(|w| w.week).collect();
        assert_eq!(weeks, vec![1, 2, 3, 4]);
        // Last week absorbs the remainder
        assert!(plan[3].topics.len() >= plan[0].topics.len());
    }

    #[test]
    fn difficult_moods_have_tips() {
        for mood in [Mood::Stressed, Mood::Anxious, Mood::Sad, Mood::Angry, Mood::Tired] {
            assert!(!stress_tips(mood).is_empty(), "{:?}", mood);
        }
        assert!(stress_tips(Mood::Great).is_empty());
    }

    #[test]
    fn breathing_need_parses() {
        assert_eq!("calm".parse::<BreathingNeed>().unwrap(), BreathingNeed::Calm);
        assert_eq!("ANXIETY".parse::<BreathingNeed>().unwrap(), BreathingNeed::Ground);
        assert!("sideways".parse::<BreathingNeed>().is_err());
    }

    #[test]
    fn random_picks_come_from_the_pools() {
        assert!(QUOTES.contains(&motivational_quote()));
        assert!(AFFIRMATIONS.contains(&affirmation()));
        assert!(JOURNAL_PROMPTS.contains(&journal_prompt()));
    }

    #[test]
    fn portfolio_ideas_fall_back() {
        assert_eq!(portfolio_ideas("Python"), PORTFOLIO_PYTHON);
        assert_eq!(portfolio_ideas("cobol"), PORTFOLIO_DEFAULT);
    }
}
