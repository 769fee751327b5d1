use crate::components::ui::product_card::ProductCard;
use crate::components::ui::skeleton_grid::SkeletonGrid;
use souq_catalog::{Language, Product};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub products: Vec<Product>,
    pub lang: Language,
    pub loading: bool,
    /// Whether a filter or search is active; an empty list with no active
    /// filter shows skeletons instead of nothing
    pub filtering: bool,
}

#[function_component(ProductGrid)]
pub fn product_grid(p: &Props) -> Html {
    let body = if p.products.is_empty() {
        if p.filtering {
            // the "no results" message is rendered by the parent
            Html::default()
        } else {
            html! { <SkeletonGrid /> }
        }
    } else {
        let cards = p.products.iter().map(|product| {
            html! {
                <ProductCard
                    key={product.slug()}
                    product={product.clone()}
                    lang={p.lang}
                />
            }
        });
        html! { <>{ for cards }</> }
    };

    html! {
        <div id="product-grid" class="product-grid" aria-busy={p.loading.to_string()}>
            { body }
        </div>
    }
}
