use yew::prelude::*;

use crate::animation::{Animation, Variant};
use crate::hooks::reveal::{use_reveal, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub animation: Animation,
    #[prop_or(RevealOptions::SCROLL)]
    pub options: RevealOptions,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that animates in the first time it is seen.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.options);
    let style = props.animation.style(Variant::from_revealed(revealed));

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
