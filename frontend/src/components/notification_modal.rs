//! Blocking notification modal for surfacing operation failures.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationModalProps {
    pub message: String,
    pub on_close: Callback<()>,
}

#[function_component(NotificationModal)]
pub fn notification_modal(props: &NotificationModalProps) -> Html {
    let on_close = props.on_close.clone();
    let on_ok = Callback::from(move |_| on_close.emit(()));

    html! {
        <div class="modal-overlay">
            <div class="modal notification-modal">
                <p class="notification-message">{ &props.message }</p>
                <div class="modal-actions">
                    <button class="primary-button" onclick={on_ok}>{ "OK" }</button>
                </div>
            </div>
        </div>
    }
}
