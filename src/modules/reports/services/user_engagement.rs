//! Platform-wide engagement overview and creator leaderboard.

use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use crate::core::numeric::ratio_2dp;
use crate::core::Result;
use crate::modules::reports::models::{
    EngagementCharts, EngagementOverview, ReportPeriod, TopCreator, UserEngagementReport,
};
use crate::modules::reports::repositories::AnalyticsStore;
use crate::modules::reports::services::time_series::count_by_day;

const LEADERBOARD_SIZE: usize = 10;

/// Build the engagement report for the given period.
///
/// The five collections are fetched concurrently; profile resolution for the
/// leaderboard follows once the post counts are known. A creator whose
/// profile cannot be resolved keeps their id and count with profile fields
/// absent.
pub async fn build(
    store: &dyn AnalyticsStore,
    period: &ReportPeriod,
) -> Result<UserEngagementReport> {
    let (posts, likes, comments, stories, redemptions) = tokio::try_join!(
        store.posts_in_period(period),
        store.likes_in_period(period),
        store.comments_in_period(period),
        store.stories_in_period(period),
        store.redemptions_claimed_in_period(period),
    )?;

    let mut active: HashSet<&str> = HashSet::new();
    active.extend(posts.iter().map(|p| p.author_id.as_str()));
    active.extend(likes.iter().map(|a| a.user_id.as_str()));
    active.extend(comments.iter().map(|a| a.user_id.as_str()));
    active.extend(stories.iter().map(|a| a.user_id.as_str()));
    active.extend(redemptions.iter().map(|r| r.user_id.as_str()));

    let mut posts_per_user: HashMap<&str, u64> = HashMap::new();
    for post in &posts {
        *posts_per_user.entry(post.author_id.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(&str, u64)> = posts_per_user.into_iter().collect();
    // Count descending, id ascending as a deterministic tie-break.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(LEADERBOARD_SIZE);

    let top_ids: Vec<String> = ranked.iter().map(|(id, _)| (*id).to_string()).collect();
    let profiles = store.profiles_by_ids(&top_ids).await?;
    let profiles_by_id: HashMap<&str, _> = profiles
        .iter()
        .map(|profile| (profile.id.as_str(), profile))
        .collect();

    let top_creators = ranked
        .iter()
        .map(|(user_id, post_count)| {
            let profile = profiles_by_id.get(user_id);
            TopCreator {
                user_id: (*user_id).to_string(),
                post_count: *post_count,
                display_name: profile.and_then(|p| p.display_name.clone()),
                avatar_url: profile.and_then(|p| p.avatar_url.clone()),
                points: profile.map(|p| p.points),
            }
        })
        .collect();

    let total_posts = posts.len() as u64;
    let total_likes = likes.len() as u64;
    let total_comments = comments.len() as u64;
    let avg_engagement_per_post = ratio_2dp(
        Decimal::from(total_likes + total_comments),
        Decimal::from(total_posts),
    );

    let daily_posts = count_by_day(&posts, |post| Some(post.created_at));
    let engagement: Vec<_> = likes.iter().chain(comments.iter()).collect();
    let daily_engagement = count_by_day(&engagement, |action| Some(action.created_at));

    Ok(UserEngagementReport {
        overview: EngagementOverview {
            active_users: active.len() as u64,
            total_posts,
            total_likes,
            total_comments,
            total_stories: stories.len() as u64,
            total_redemptions: redemptions.len() as u64,
            avg_engagement_per_post,
        },
        top_creators,
        charts: EngagementCharts {
            daily_posts,
            daily_engagement,
        },
        period: *period,
    })
}
