//! Prompt construction for insight generation

use crate::domain::expert::Expert;

/// Builds the instruction sent to the text generation provider for one
/// expert and (normalized) search topic.
pub fn build_insight_prompt(expert: &Expert, topic: &str) -> String {
    format!(
        "You are an assistant on an expert discovery platform.\n\
         A user is searching for an expert on the topic: \"{topic}\".\n\
         Here is an expert:\n\
         - Name: {name}\n\
         - Bio: {bio}\n\
         - Category: {category}\n\
         \n\
         Your task is to write a two lines, professional \"AI Insight\" sentence (max 40 words)\n\
         explaining WHY this expert is a good match for the topic.\n\
         \n\
         Do not use markdown. Do not use quotes.\n\
         \n\
         Example: This expert's experience in career coaching is ideal for professionals seeking a new role.",
        topic = topic,
        name = expert.name,
        bio = expert.bio,
        category = expert.category,
    )
}
