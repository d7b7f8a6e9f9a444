use crate::frequency::rank_by_frequency;
use profiler_core::{
    CharacterProfile, CommunicationStyle, ContentItem, EngagementLevel, PersonalityTrait,
    SentimentSummary,
};

pub const DEFAULT_FOCUS_COUNT: usize = 5;

const OPTIMISTIC_POLARITY: f64 = 0.2;
const CRITICAL_POLARITY: f64 = -0.2;
const OPINIONATED_SUBJECTIVITY: f64 = 0.6;
const EXPRESSIVE_SUBJECTIVITY: f64 = 0.7;
const FACTUAL_SUBJECTIVITY: f64 = 0.3;
const HIGHLY_ACTIVE: usize = 50;
const MODERATELY_ACTIVE: usize = 20;

/// Derives qualitative traits from aggregate sentiment and activity shape.
pub fn build_profile(
    summary: &SentimentSummary,
    posts: &[ContentItem],
    comments: &[ContentItem],
    focus_count: usize,
) -> CharacterProfile {
    if summary.total_analyzed == 0 {
        return CharacterProfile {
            personality_traits: vec![PersonalityTrait::InsufficientData],
            communication_style: CommunicationStyle::Unknown,
            engagement_level: EngagementLevel::Unknown,
            content_focus: Vec::new(),
        };
    }

    let polarity = summary.overall_polarity;
    let subjectivity = summary.overall_subjectivity;
    let total_posts = posts.len();
    let total_comments = comments.len();

    let mut traits = vec![tone(polarity), style(subjectivity)];
    // Comment-to-post ratios between 1x and 3x add no third trait
    if total_posts > total_comments {
        traits.push(PersonalityTrait::ContentCreator);
    } else if total_comments > 3 * total_posts {
        traits.push(PersonalityTrait::ActiveCommenter);
    }

    CharacterProfile {
        personality_traits: traits,
        communication_style: communication_style(subjectivity),
        engagement_level: engagement_level(total_posts + total_comments),
        content_focus: content_focus(posts, comments, focus_count),
    }
}

fn tone(polarity: f64) -> PersonalityTrait {
    if polarity > OPTIMISTIC_POLARITY {
        PersonalityTrait::Optimistic
    } else if polarity < CRITICAL_POLARITY {
        PersonalityTrait::Critical
    } else {
        PersonalityTrait::Balanced
    }
}

fn style(subjectivity: f64) -> PersonalityTrait {
    if subjectivity > OPINIONATED_SUBJECTIVITY {
        PersonalityTrait::Opinionated
    } else if subjectivity < FACTUAL_SUBJECTIVITY {
        PersonalityTrait::Factual
    } else {
        PersonalityTrait::Moderate
    }
}

fn communication_style(subjectivity: f64) -> CommunicationStyle {
    if subjectivity > EXPRESSIVE_SUBJECTIVITY {
        CommunicationStyle::ExpressiveAndPersonal
    } else if subjectivity < FACTUAL_SUBJECTIVITY {
        CommunicationStyle::ObjectiveAndFactual
    } else {
        CommunicationStyle::BalancedAndThoughtful
    }
}

fn engagement_level(total_activity: usize) -> EngagementLevel {
    if total_activity > HIGHLY_ACTIVE {
        EngagementLevel::HighlyActive
    } else if total_activity > MODERATELY_ACTIVE {
        EngagementLevel::ModeratelyActive
    } else {
        EngagementLevel::CasualUser
    }
}

/// Most frequent communities across posts then comments.
fn content_focus(posts: &[ContentItem], comments: &[ContentItem], top_n: usize) -> Vec<String> {
    let communities = posts
        .iter()
        .chain(comments)
        .map(|item| item.subreddit.as_str());

    rank_by_frequency(communities, top_n)
        .into_iter()
        .map(|(subreddit, _)| subreddit.to_string())
        .collect()
}
