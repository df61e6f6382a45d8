use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub label: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <span class="section-label">{props.label.clone()}</span>
            <h2 class="section-title">{props.title.clone()}</h2>
            if let Some(description) = props.description.clone() {
                <p class="section-description">{description}</p>
            }
        </div>
    }
}
