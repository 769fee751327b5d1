mod handlers;

pub use handlers::AppHandlers;

use crate::app::CONTACT_URL;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::category_bar::CategoryBar;
use crate::components::ui::error_banner::ErrorBanner;
use crate::components::ui::order_dialog::OrderDialog;
use crate::components::ui::product_grid::ProductGrid;
use crate::components::ui::search_box::SearchBox;
use crate::components::ui::sort_select::SortSelect;
use crate::i18n::t;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let lang = state.language();
    let products = state.derived_products();
    // "no results" only makes sense once a non-empty catalog filtered to nothing
    let no_results = !state.catalog.is_empty() && products.is_empty();

    let open_contact = {
        let open_order = handlers.open_order.clone();
        Callback::from(move |()| open_order.emit(AttrValue::from(CONTACT_URL)))
    };
    let browse = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        crate::dom::scroll_into_view("products");
    });
    let back_to_top = {
        let cb = handlers.back_to_top.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <>
            <Header
                condensed={*state.condensed_header}
                current_lang={(*state.current_language).clone()}
                theme={*state.theme}
                on_lang_change={handlers.lang_change.clone()}
                on_toggle_theme={handlers.toggle_theme.clone()}
                on_contact={open_contact}
            />
            <main id="main" role="main">
                <section class="hero">
                    <h1>{ t("hero.title") }</h1>
                    <p class="hero-subtitle">{ t("hero.subtitle") }</p>
                    <a class="hero-browse" href="#products" onclick={browse}>{ t("hero.browse") }</a>
                    <div
                        class={classes!("scroll-prompt", (*state.condensed_header).then_some("faded"))}
                        aria-hidden="true"
                    >
                        { t("hero.scroll_down") }
                    </div>
                </section>
                <section id="products">
                    <h2>{ t("products.title") }</h2>
                    if *state.load_failed {
                        <ErrorBanner />
                    }
                    <CategoryBar
                        categories={state.category_labels()}
                        active={(*state.category).clone()}
                        on_select={handlers.select_category.clone()}
                    />
                    <div class="catalog-controls">
                        <SortSelect value={*state.sort} on_change={handlers.sort_change.clone()} />
                        <SearchBox
                            value={(*state.search).clone()}
                            on_search={handlers.search_change.clone()}
                            on_clear={handlers.clear_search.clone()}
                        />
                    </div>
                    <ProductGrid
                        products={products}
                        {lang}
                        loading={*state.loading}
                        filtering={state.is_filtering()}
                    />
                    if no_results {
                        <p id="no-results-message" class="no-results" role="status">
                            { t("products.none_found") }
                        </p>
                    }
                </section>
            </main>
            <OrderDialog link={(*state.order_link).clone()} on_close={handlers.close_order.clone()} />
            if *state.show_back_to_top {
                <button
                    id="back-to-top"
                    class="back-to-top"
                    aria-label={t("nav.back_to_top")}
                    onclick={back_to_top}
                >
                    {"↑"}
                </button>
            }
            <Footer />
        </>
    }
}
