use crate::components::modal::Modal;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// External order link; `Some` opens the dialog
    pub link: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(OrderDialog)]
pub fn order_dialog(p: &Props) -> Html {
    let Some(link) = p.link.clone() else {
        return Html::default();
    };

    let cancel = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // the anchor performs the navigation itself; just dismiss the dialog
    let proceed = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <Modal
            open={true}
            title={AttrValue::from(t("modal.title"))}
            description={Some(AttrValue::from(t("modal.text")))}
            on_close={p.on_close.clone()}
        >
            <div class="modal__actions">
                <button id="modal-cancel-btn" class="modal-cancel" onclick={cancel}>
                    { t("modal.cancel") }
                </button>
                <a
                    id="modal-proceed-btn"
                    class="modal-proceed"
                    href={link}
                    target="_blank"
                    rel="noopener noreferrer"
                    onclick={proceed}
                >
                    { t("modal.proceed") }
                </a>
            </div>
        </Modal>
    }
}
