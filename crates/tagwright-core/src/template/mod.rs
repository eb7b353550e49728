//! Built-in prompt templates and categories.

pub mod model;

use crate::error::{TagwrightError, TagwrightResult};

pub use model::{Category, Template};

const CODING_ASSISTANT: &str = "<instructions>
You are an expert software engineer. Help the user with their coding task.

## Guidelines
- Write clean, maintainable code
- Follow best practices for the language/framework
- Provide explanations for complex logic
- Consider edge cases and error handling
</instructions>

<context>
Project context goes here...
</context>

<constraints>
- Use TypeScript
- Follow the existing code style
- Write tests for new functionality
</constraints>";

const DATA_ANALYSIS: &str = "<instructions>
Analyze the provided data and generate insights.

## Analysis Steps
1. Data validation and cleaning
2. Exploratory data analysis
3. Statistical analysis
4. Visualization recommendations
5. Key findings and recommendations
</instructions>

<context>
Dataset description:
[Describe your dataset here]
</context>

<output>
Provide:
- Summary statistics
- Key insights
- Actionable recommendations
- Suggested visualizations
</output>";

const CREATIVE_WRITING: &str = "<instructions>
Create engaging creative content based on the requirements.

## Writing Guidelines
- Maintain consistent tone and style
- Use vivid, descriptive language
- Ensure logical flow and structure
- Consider the target audience
</instructions>

<context>
Genre: [Genre]
Target audience: [Audience]
Tone: [Tone]
</context>

<constraints>
- Word count: [Count]
- Perspective: [First/Third person]
- Additional requirements: [Requirements]
</constraints>";

fn category(id: &str, name: &str, color: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn template(id: &str, name: &str, description: &str, category: &str, content: &str) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        content: content.to_string(),
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        category("coding", "Coding Assistant", "#3b82f6"),
        category("analysis", "Data Analysis", "#8b5cf6"),
        category("creative", "Creative Writing", "#ec4899"),
        category("general", "General", "#6b7280"),
    ]
}

pub fn default_templates() -> Vec<Template> {
    vec![
        template(
            "coding-assistant",
            "Coding Assistant",
            "A structured prompt for code-related tasks",
            "coding",
            CODING_ASSISTANT,
        ),
        template(
            "data-analysis",
            "Data Analysis",
            "Template for data analysis and insights",
            "analysis",
            DATA_ANALYSIS,
        ),
        template(
            "creative-writing",
            "Creative Writing",
            "Template for creative writing tasks",
            "creative",
            CREATIVE_WRITING,
        ),
    ]
}

/// Look up a built-in template by id.
pub fn find_template(id: &str) -> TagwrightResult<Template> {
    default_templates()
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| TagwrightError::TemplateNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{extract_tags, validate};

    #[test]
    fn test_templates_validate_clean() {
        for t in default_templates() {
            let result = validate(&t.content);
            assert!(result.is_valid, "{}: {:?}", t.id, result.errors);
        }
    }

    #[test]
    fn test_template_categories_exist() {
        let categories = default_categories();
        for t in default_templates() {
            assert!(categories.iter().any(|c| c.id == t.category), "{}", t.category);
        }
    }

    #[test]
    fn test_find_template() {
        let t = find_template("data-analysis").unwrap();
        let tags: Vec<String> = extract_tags(&t.content).into_iter().collect();
        assert_eq!(tags, vec!["context", "instructions", "output"]);

        assert!(matches!(
            find_template("missing"),
            Err(TagwrightError::TemplateNotFound(_))
        ));
    }
}
