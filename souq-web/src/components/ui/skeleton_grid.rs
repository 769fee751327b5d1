use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct Props {
    /// Number of placeholder cards
    #[prop_or(4)]
    pub count: usize,
}

#[function_component(SkeletonGrid)]
pub fn skeleton_grid(p: &Props) -> Html {
    let cards = (0..p.count).map(|i| {
        html! {
            <div key={i} class="product-skeleton" aria-hidden="true">
                <div class="skeleton skeleton--image"></div>
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--text"></div>
                <div class="skeleton skeleton--text skeleton--short"></div>
                <div class="skeleton skeleton--action"></div>
            </div>
        }
    });
    html! { <>{ for cards }</> }
}
