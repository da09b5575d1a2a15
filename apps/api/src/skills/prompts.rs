// Skills LLM prompt templates.

pub const SKILL_SUGGEST_SYSTEM: &str =
    "You are a career coach. Suggest trending skills for this user.";

pub const SKILL_SUGGEST_PROMPT: &str = "User Profile: {profile}. \
Suggest {count} trending skills relevant to their profession and industry.
{list_instruction}";

pub const SKILL_SUGGEST_MAX_TOKENS: u32 = 200;
pub const SKILL_SUGGEST_TEMPERATURE: f32 = 0.5;

pub const COURSE_RECOMMEND_SYSTEM: &str = "\
You are a career coach who recommends concrete learning resources. \
Answer in Markdown with a short bulleted list.";

pub const COURSE_RECOMMEND_PROMPT: &str = "User Profile: {profile}.
Skills with the largest gap between current and target level (0-5 scale): {gaps}.
Recommend online courses or certifications that close these gaps. \
For each, name the course, the provider, and the skill it covers.";

pub const COURSE_RECOMMEND_MAX_TOKENS: u32 = 400;
pub const COURSE_RECOMMEND_TEMPERATURE: f32 = 0.5;
