use dioxus::prelude::*;

/// Props shared by every icon. Icons are 24x24 outline glyphs drawn with
/// `currentColor`, so they follow the surrounding text color.
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
fn Svg(icon: IconProps, children: Element) -> Element {
    let class = icon.class.unwrap_or_default();
    rsx! {
        svg {
            width: "{icon.size}",
            height: "{icon.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class,
            {children}
        }
    }
}

pub fn Leaf(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z" }
            path { d: "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12" }
        }
    }
}

pub fn Globe(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" }
            path { d: "M2 12h20" }
        }
    }
}

pub fn MapPin(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

pub fn Sun(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

pub fn Cloud(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" }
        }
    }
}

pub fn CloudRain(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242" }
            path { d: "M16 14v6" }
            path { d: "M8 14v6" }
            path { d: "M12 16v6" }
        }
    }
}

pub fn Wind(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2" }
            path { d: "M9.6 4.6A2 2 0 1 1 11 8H2" }
            path { d: "M12.6 19.4A2 2 0 1 0 14 16H2" }
        }
    }
}

pub fn Droplets(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z" }
            path { d: "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97" }
        }
    }
}

pub fn Wheat(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M2 22 16 8" }
            path { d: "M3.47 12.53 5 11l1.53 1.53a3.5 3.5 0 0 1 0 4.94L5 19l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z" }
            path { d: "M7.47 8.53 9 7l1.53 1.53a3.5 3.5 0 0 1 0 4.94L9 15l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z" }
            path { d: "M11.47 4.53 13 3l1.53 1.53a3.5 3.5 0 0 1 0 4.94L13 11l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z" }
            path { d: "M20 2h2v2a4 4 0 0 1-4 4h-2V6a4 4 0 0 1 4-4Z" }
        }
    }
}

pub fn Sprout(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M7 20h10" }
            path { d: "M10 20c5.5-2.5.8-6.4 3-10" }
            path { d: "M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z" }
            path { d: "M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z" }
        }
    }
}

pub fn Calendar(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M8 2v4" }
            path { d: "M16 2v4" }
            rect { width: "18", height: "18", x: "3", y: "4", rx: "2" }
            path { d: "M3 10h18" }
        }
    }
}

pub fn Camera(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        }
    }
}

pub fn Upload(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "17 8 12 3 7 8" }
            line { x1: "12", x2: "12", y1: "3", y2: "15" }
        }
    }
}

pub fn Satellite(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M13 7 9 3 5 7l4 4" }
            path { d: "m17 11 4 4-4 4-4-4" }
            path { d: "m8 12 4 4 6-6-4-4Z" }
            path { d: "m16 8 3-3" }
            path { d: "M9 21a6 6 0 0 0-6-6" }
        }
    }
}

pub fn Beaker(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M4.5 3h15" }
            path { d: "M6 3v16a2 2 0 0 0 2 2h8a2 2 0 0 0 2-2V3" }
            path { d: "M6 14h12" }
        }
    }
}

pub fn Loader(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M12 2v4" }
            path { d: "m16.2 7.8 2.9-2.9" }
            path { d: "M18 12h4" }
            path { d: "m16.2 16.2 2.9 2.9" }
            path { d: "M12 18v4" }
            path { d: "m4.9 19.1 2.9-2.9" }
            path { d: "M2 12h4" }
            path { d: "m4.9 4.9 2.9 2.9" }
        }
    }
}

pub fn Zap(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "M13 2 3 14h9l-1 8 10-12h-9l1-8z" }
        }
    }
}

pub fn Info(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        }
    }
}

pub fn Clock(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        }
    }
}

pub fn CircleCheck(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

pub fn CircleAlert(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        }
    }
}

pub fn TriangleAlert(icon: IconProps) -> Element {
    rsx! {
        Svg { icon,
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" }
            line { x1: "12", x2: "12", y1: "9", y2: "13" }
            line { x1: "12", x2: "12.01", y1: "17", y2: "17" }
        }
    }
}
