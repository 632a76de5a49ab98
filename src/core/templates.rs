//! Embedded stubs for a new component.
//!
//! The slug is baked into each template's import paths when the template is
//! built; the component name stays a `{{name}}` placeholder for the renderer.
//! Inside `format!` the placeholder is written `{{{{name}}}}` and literal
//! braces are doubled.

const TYPES_TEMPLATE: &str = r#"
export interface I{{name}} {}
  "#;

/// A template for one file of the component folder.
pub struct ComponentTemplate {
    pub filename: String,
    pub template: String,
}

/// Returns the four templates in write order: component, types, stories,
/// barrel.
pub fn component_templates(slug: &str) -> Vec<ComponentTemplate> {
    vec![
        ComponentTemplate {
            filename: format!("{}.tsx", slug),
            template: component_stub(slug),
        },
        ComponentTemplate {
            filename: format!("{}.type.ts", slug),
            template: TYPES_TEMPLATE.to_string(),
        },
        ComponentTemplate {
            filename: format!("{}.stories.tsx", slug),
            template: stories_stub(slug),
        },
        ComponentTemplate {
            filename: "index.ts".to_string(),
            template: barrel_stub(slug),
        },
    ]
}

fn component_stub(slug: &str) -> String {
    format!(
        r#"
import type {{I{{{{name}}}} as Props}} from './{slug}.type';

export const {{{{name}}}}: React.FC<Props> = (Props) => {{
  return <div></div>;
}};
  "#
    )
}

// `StoryObj` is referenced without being imported; generated projects rely
// on this exact shape.
fn stories_stub(slug: &str) -> String {
    format!(
        r#"
import type {{Meta, Story}} from '@storybook/react';
import {{{{name}}}} from './{slug}';

const meta: Meta<typeof {{{{name}}}}> = {{
      title: 'components/{{{{name}}}}',
      component: {{{{name}}}},
}};
export default meta;
  
type Story = StoryObj<typeof {{{{name}}}}>;

export const Default: Story = {{
      render: (args) => <{{{{name}}}} {{...args}} />,
      args: {{}},
}};
  "#
    )
}

fn barrel_stub(slug: &str) -> String {
    format!(
        r#"
export * from './{slug}';
export * from './{slug}.type';
  "#
    )
}
