use web_sys::Element;
use yew::prelude::*;

use folio_core::ProjectCard;

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectGridProps {
    pub(crate) cards: Vec<ProjectCard>,
}

#[function_component(ProjectGrid)]
pub(crate) fn project_grid(props: &ProjectGridProps) -> Html {
    html! {
        <>
            { for props.cards.iter().enumerate().map(|(idx, card)| project_card(idx, card)) }
        </>
    }
}

fn project_card(idx: usize, card: &ProjectCard) -> Html {
    html! {
        <div class="project-card" key={idx}>
            <div class="project-header">
                <h3 class="project-title">{ card.title.clone() }</h3>
                <p class="project-description">{ card.description.clone() }</p>
            </div>
            if let Some(tag) = card.tag.as_ref() {
                <div class="project-tech">
                    <span class="tech-tag" style={tag.style()}>{ tag.label.clone() }</span>
                </div>
            }
            <div class="project-links">
                <a href={card.source_url.clone()} target="_blank" class="project-link primary">
                    <i class="fab fa-github"></i>
                    { "Código" }
                </a>
                if let Some(demo) = card.demo_url.as_ref() {
                    <a href={demo.clone()} target="_blank" class="project-link secondary">
                        <i class="fas fa-external-link-alt"></i>
                        { "Demo" }
                    </a>
                }
            </div>
        </div>
    }
}

/// Replaces the grid's contents with one card per project.
pub(crate) fn mount(grid: Element, cards: Vec<ProjectCard>) {
    grid.set_inner_html("");
    let _app_handle =
        yew::Renderer::<ProjectGrid>::with_root_and_props(grid, ProjectGridProps { cards })
            .render();
}
