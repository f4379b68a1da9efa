use yew::prelude::*;

use crate::models::menu::{toggle_submenu, LOGOUT_ITEM};
use crate::models::{MenuCommand, MenuItem, MENU_ITEMS};
use crate::utils::t;

#[derive(Properties, PartialEq)]
pub struct SideMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_command: Callback<MenuCommand>,
}

#[function_component(SideMenu)]
pub fn side_menu(props: &SideMenuProps) -> Html {
    let open_submenu = use_state(|| None::<String>);

    let render_leaf = |item: &'static MenuItem, extra_class: &'static str| {
        let on_command = props.on_command.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            match item.command() {
                Some(command) => on_command.emit(command),
                None => log::info!("ℹ️ Opción de menú sin acción: {}", item.id),
            }
        });

        html! {
            <button key={item.id} class={classes!("menu-item", extra_class)} {onclick}>
                <span class="menu-icon">{item.icon}</span>
                <span class="menu-label">{item.label}</span>
            </button>
        }
    };

    let render_item = |item: &'static MenuItem| {
        if !item.has_submenu() {
            return render_leaf(item, "");
        }

        let is_open = open_submenu.as_deref() == Some(item.id);
        let toggle = {
            let open_submenu = open_submenu.clone();
            Callback::from(move |_: MouseEvent| {
                open_submenu.set(toggle_submenu(open_submenu.as_deref(), item.id));
            })
        };

        html! {
            <div key={item.id} class="menu-group">
                <button class="menu-item" onclick={toggle}>
                    <span class="menu-icon">{item.icon}</span>
                    <span class="menu-label">{item.label}</span>
                    <span class={classes!("chevron", is_open.then_some("rotated"))}>{"▾"}</span>
                </button>
                if is_open {
                    <div class="submenu">
                        { for item.submenu.iter().map(|sub| render_leaf(sub, "submenu-item")) }
                    </div>
                }
            </div>
        }
    };

    let class = if props.open { "side-menu active" } else { "side-menu" };
    let close_overlay = props.on_close.clone();

    html! {
        <>
            if props.open {
                <div class="side-menu-overlay" onclick={Callback::from(move |_| close_overlay.emit(()))}></div>
            }
            <aside {class} dir="rtl" aria-label={t("side_menu_title")}>
                <nav class="side-menu-items">
                    { for MENU_ITEMS.iter().map(render_item) }
                    { render_leaf(&LOGOUT_ITEM, "menu-logout") }
                </nav>
            </aside>
        </>
    }
}
