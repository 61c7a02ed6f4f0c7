//! ProPresenter 7 (`rv.data`) message subset.
//!
//! Only the messages and fields the encoder populates are declared. Tags
//! follow the published `rv.data` proto files; fields left out here are
//! simply absent from the wire, which the viewer treats as defaults.

/// Identifier wrapper; always an upper-case hyphenated UUID string.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Uuid {
    #[prost(string, tag = "1")]
    pub string: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Color {
    #[prost(float, tag = "1")]
    pub red: f32,
    #[prost(float, tag = "2")]
    pub green: f32,
    #[prost(float, tag = "3")]
    pub blue: f32,
    #[prost(float, tag = "4")]
    pub alpha: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApplicationInfo {
    #[prost(enumeration = "application_info::Platform", tag = "1")]
    pub platform: i32,
    #[prost(message, optional, tag = "2")]
    pub platform_version: ::core::option::Option<Version>,
    #[prost(enumeration = "application_info::Application", tag = "3")]
    pub application: i32,
    #[prost(message, optional, tag = "4")]
    pub application_version: ::core::option::Option<Version>,
}

/// Nested message and enum types in `ApplicationInfo`.
pub mod application_info {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Platform {
        Undefined = 0,
        Macos = 1,
        Windows = 2,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Application {
        Undefined = 0,
        Propresenter = 1,
        Pvp = 2,
        Provideoserver = 3,
        Scoreboard = 4,
    }
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Version {
    #[prost(uint32, tag = "1")]
    pub major_version: u32,
    #[prost(uint32, tag = "2")]
    pub minor_version: u32,
    #[prost(uint32, tag = "3")]
    pub patch_version: u32,
    #[prost(string, tag = "4")]
    pub build: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Presentation {
    #[prost(message, optional, tag = "1")]
    pub application_info: ::core::option::Option<ApplicationInfo>,
    #[prost(message, optional, tag = "2")]
    pub uuid: ::core::option::Option<Uuid>,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub last_date_used: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub last_modified_date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "6")]
    pub category: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub notes: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "10")]
    pub selected_arrangement: ::core::option::Option<Uuid>,
    #[prost(message, repeated, tag = "11")]
    pub arrangements: ::prost::alloc::vec::Vec<presentation::Arrangement>,
    #[prost(message, repeated, tag = "12")]
    pub cue_groups: ::prost::alloc::vec::Vec<presentation::CueGroup>,
    #[prost(message, repeated, tag = "13")]
    pub cues: ::prost::alloc::vec::Vec<Cue>,
    #[prost(message, optional, tag = "14")]
    pub ccli: ::core::option::Option<presentation::Ccli>,
}

/// Nested message and enum types in `Presentation`.
pub mod presentation {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Ccli {
        #[prost(string, tag = "1")]
        pub author: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub artist_credits: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub song_title: ::prost::alloc::string::String,
        #[prost(string, tag = "4")]
        pub publisher: ::prost::alloc::string::String,
        #[prost(uint32, tag = "5")]
        pub copyright_year: u32,
        #[prost(uint32, tag = "6")]
        pub song_number: u32,
        #[prost(bool, tag = "7")]
        pub display: bool,
        #[prost(string, tag = "8")]
        pub album: ::prost::alloc::string::String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Arrangement {
        #[prost(message, optional, tag = "1")]
        pub uuid: ::core::option::Option<super::Uuid>,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "3")]
        pub group_identifiers: ::prost::alloc::vec::Vec<super::Uuid>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CueGroup {
        #[prost(message, optional, tag = "1")]
        pub group: ::core::option::Option<super::Group>,
        #[prost(message, repeated, tag = "2")]
        pub cue_identifiers: ::prost::alloc::vec::Vec<super::Uuid>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Group {
    #[prost(message, optional, tag = "1")]
    pub uuid: ::core::option::Option<Uuid>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub color: ::core::option::Option<Color>,
    #[prost(message, optional, tag = "5")]
    pub application_group_identifier: ::core::option::Option<Uuid>,
    #[prost(string, tag = "6")]
    pub application_group_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cue {
    #[prost(message, optional, tag = "1")]
    pub uuid: ::core::option::Option<Uuid>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(enumeration = "cue::CompletionTargetType", tag = "3")]
    pub completion_target_type: i32,
    #[prost(message, optional, tag = "4")]
    pub completion_target_uuid: ::core::option::Option<Uuid>,
    #[prost(enumeration = "cue::CompletionActionType", tag = "5")]
    pub completion_action_type: i32,
    #[prost(message, optional, tag = "6")]
    pub completion_action_uuid: ::core::option::Option<Uuid>,
    #[prost(message, optional, tag = "7")]
    pub trigger_time: ::core::option::Option<cue::TimecodeTime>,
    #[prost(message, repeated, tag = "10")]
    pub actions: ::prost::alloc::vec::Vec<Action>,
    #[prost(bool, tag = "12")]
    pub is_enabled: bool,
    #[prost(double, tag = "13")]
    pub completion_time: f64,
}

/// Nested message and enum types in `Cue`.
pub mod cue {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct TimecodeTime {
        #[prost(double, tag = "1")]
        pub time: f64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum CompletionTargetType {
        None = 0,
        Next = 1,
        Random = 2,
        Cue = 3,
        First = 4,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum CompletionActionType {
        First = 0,
        Last = 1,
        AfterAction = 2,
        AfterTime = 3,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(message, optional, tag = "1")]
    pub uuid: ::core::option::Option<Uuid>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag = "4")]
    pub delay_time: f64,
    #[prost(bool, tag = "6")]
    pub is_enabled: bool,
    #[prost(double, tag = "8")]
    pub duration: f64,
    #[prost(enumeration = "action::ActionType", tag = "9")]
    pub r#type: i32,
    #[prost(oneof = "action::ActionTypeData", tags = "23")]
    pub action_type_data: ::core::option::Option<action::ActionTypeData>,
}

/// Nested message and enum types in `Action`.
pub mod action {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ActionType {
        Unknown = 0,
        StageLayout = 1,
        Media = 2,
        Timer = 3,
        Communication = 4,
        Clear = 5,
        Prop = 6,
        Mask = 7,
        Message = 8,
        SocialMedia = 9,
        Multiscreen = 10,
        PresentationSlide = 11,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SlideType {
        #[prost(oneof = "slide_type::Slide", tags = "2")]
        pub slide: ::core::option::Option<slide_type::Slide>,
    }

    /// Nested message and enum types in `SlideType`.
    pub mod slide_type {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Slide {
            #[prost(message, tag = "2")]
            Presentation(super::super::PresentationSlide),
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ActionTypeData {
        #[prost(message, tag = "23")]
        Slide(SlideType),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PresentationSlide {
    #[prost(message, optional, tag = "1")]
    pub base_slide: ::core::option::Option<Slide>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Slide {
    #[prost(message, repeated, tag = "1")]
    pub elements: ::prost::alloc::vec::Vec<slide::Element>,
    #[prost(message, repeated, tag = "2")]
    pub element_build_order: ::prost::alloc::vec::Vec<Uuid>,
    #[prost(bool, tag = "4")]
    pub draws_background_color: bool,
    #[prost(message, optional, tag = "5")]
    pub background_color: ::core::option::Option<Color>,
    #[prost(message, optional, tag = "6")]
    pub size: ::core::option::Option<graphics::Size>,
    #[prost(message, optional, tag = "7")]
    pub uuid: ::core::option::Option<Uuid>,
}

/// Nested message and enum types in `Slide`.
pub mod slide {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Element {
        #[prost(message, optional, tag = "1")]
        pub element: ::core::option::Option<super::graphics::Element>,
        #[prost(uint32, tag = "4")]
        pub info: u32,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Font {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag = "2")]
    pub size: f64,
    #[prost(bool, tag = "4")]
    pub italic: bool,
    #[prost(bool, tag = "8")]
    pub bold: bool,
    #[prost(string, tag = "9")]
    pub family: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub face: ::prost::alloc::string::String,
}

/// `rv.data.Graphics` nested types.
pub mod graphics {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Point {
        #[prost(double, tag = "1")]
        pub x: f64,
        #[prost(double, tag = "2")]
        pub y: f64,
    }

    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Size {
        #[prost(double, tag = "1")]
        pub width: f64,
        #[prost(double, tag = "2")]
        pub height: f64,
    }

    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Rect {
        #[prost(message, optional, tag = "1")]
        pub origin: ::core::option::Option<Point>,
        #[prost(message, optional, tag = "2")]
        pub size: ::core::option::Option<Size>,
    }

    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct EdgeInsets {
        #[prost(double, tag = "1")]
        pub left: f64,
        #[prost(double, tag = "2")]
        pub right: f64,
        #[prost(double, tag = "3")]
        pub top: f64,
        #[prost(double, tag = "4")]
        pub bottom: f64,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Element {
        #[prost(message, optional, tag = "1")]
        pub uuid: ::core::option::Option<super::Uuid>,
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "3")]
        pub bounds: ::core::option::Option<Rect>,
        #[prost(double, tag = "4")]
        pub rotation: f64,
        #[prost(double, tag = "5")]
        pub opacity: f64,
        #[prost(bool, tag = "6")]
        pub locked: bool,
        #[prost(bool, tag = "7")]
        pub aspect_ratio_locked: bool,
        #[prost(message, optional, tag = "8")]
        pub path: ::core::option::Option<Path>,
        #[prost(message, optional, tag = "9")]
        pub fill: ::core::option::Option<Fill>,
        #[prost(message, optional, tag = "10")]
        pub stroke: ::core::option::Option<Stroke>,
        #[prost(message, optional, tag = "11")]
        pub shadow: ::core::option::Option<Shadow>,
        #[prost(message, optional, tag = "12")]
        pub feather: ::core::option::Option<Feather>,
        #[prost(message, optional, tag = "13")]
        pub text: ::core::option::Option<Text>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Path {
        #[prost(bool, tag = "1")]
        pub closed: bool,
        #[prost(message, repeated, tag = "2")]
        pub points: ::prost::alloc::vec::Vec<path::BezierPoint>,
        #[prost(message, optional, tag = "3")]
        pub shape: ::core::option::Option<path::Shape>,
    }

    /// Nested message and enum types in `Path`.
    pub mod path {
        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct BezierPoint {
            #[prost(message, optional, tag = "1")]
            pub point: ::core::option::Option<super::Point>,
            #[prost(message, optional, tag = "2")]
            pub q0: ::core::option::Option<super::Point>,
            #[prost(message, optional, tag = "3")]
            pub q1: ::core::option::Option<super::Point>,
            #[prost(bool, tag = "4")]
            pub curved: bool,
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        pub struct Shape {
            #[prost(enumeration = "shape::Type", tag = "1")]
            pub r#type: i32,
        }

        /// Nested message and enum types in `Shape`.
        pub mod shape {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Type {
                Unknown = 0,
                Rectangle = 1,
                Ellipse = 2,
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Fill {
        #[prost(bool, tag = "1")]
        pub enable: bool,
        #[prost(message, optional, tag = "2")]
        pub color: ::core::option::Option<super::Color>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Stroke {
        #[prost(enumeration = "stroke::Style", tag = "1")]
        pub style: i32,
        #[prost(double, tag = "2")]
        pub width: f64,
        #[prost(message, optional, tag = "3")]
        pub color: ::core::option::Option<super::Color>,
        #[prost(double, repeated, tag = "4")]
        pub pattern: ::prost::alloc::vec::Vec<f64>,
        #[prost(bool, tag = "5")]
        pub enable: bool,
    }

    /// Nested message and enum types in `Stroke`.
    pub mod stroke {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Style {
            SolidLine = 0,
            SquareDash = 1,
            ShortDash = 2,
            LongDash = 3,
        }
    }

    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Shadow {
        #[prost(enumeration = "shadow::Style", tag = "1")]
        pub style: i32,
        #[prost(double, tag = "2")]
        pub angle: f64,
        #[prost(double, tag = "3")]
        pub offset: f64,
        #[prost(double, tag = "4")]
        pub radius: f64,
        #[prost(message, optional, tag = "5")]
        pub color: ::core::option::Option<super::Color>,
        #[prost(double, tag = "6")]
        pub opacity: f64,
        #[prost(bool, tag = "7")]
        pub enable: bool,
    }

    /// Nested message and enum types in `Shadow`.
    pub mod shadow {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Style {
            Drop = 0,
        }
    }

    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Feather {
        #[prost(enumeration = "feather::Style", tag = "1")]
        pub style: i32,
        #[prost(double, tag = "2")]
        pub radius: f64,
        #[prost(bool, tag = "3")]
        pub enable: bool,
    }

    /// Nested message and enum types in `Feather`.
    pub mod feather {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Style {
            Inside = 0,
            Center = 1,
            Outside = 2,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Text {
        #[prost(message, optional, tag = "3")]
        pub attributes: ::core::option::Option<text::Attributes>,
        #[prost(message, optional, tag = "4")]
        pub shadow: ::core::option::Option<Shadow>,
        #[prost(bytes = "vec", tag = "5")]
        pub rtf_data: ::prost::alloc::vec::Vec<u8>,
        #[prost(enumeration = "text::VerticalAlignment", tag = "6")]
        pub vertical_alignment: i32,
        #[prost(enumeration = "text::ScaleBehavior", tag = "7")]
        pub scale_behavior: i32,
        #[prost(message, optional, tag = "8")]
        pub margins: ::core::option::Option<EdgeInsets>,
        #[prost(bool, tag = "9")]
        pub is_superscript_standardized: bool,
    }

    /// Nested message and enum types in `Text`.
    pub mod text {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum VerticalAlignment {
            Top = 0,
            Middle = 1,
            Bottom = 2,
        }

        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum ScaleBehavior {
            None = 0,
            AdjustContainerHeight = 1,
            ScaleFontDown = 2,
            ScaleFontUp = 3,
            ScaleFontUpDown = 4,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Attributes {
            #[prost(message, optional, tag = "1")]
            pub font: ::core::option::Option<super::super::Font>,
            #[prost(enumeration = "attributes::Capitalization", tag = "2")]
            pub capitalization: i32,
            #[prost(message, optional, tag = "8")]
            pub paragraph_style: ::core::option::Option<attributes::Paragraph>,
            #[prost(double, tag = "9")]
            pub kerning: f64,
            #[prost(oneof = "attributes::Fill", tags = "10")]
            pub fill: ::core::option::Option<attributes::Fill>,
        }

        /// Nested message and enum types in `Attributes`.
        pub mod attributes {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Capitalization {
                None = 0,
                AllCaps = 1,
                SmallCaps = 2,
                TitleCase = 3,
                StartCase = 4,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum Alignment {
                Left = 0,
                Right = 1,
                Center = 2,
                Justified = 3,
                Natural = 4,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Paragraph {
                #[prost(enumeration = "Alignment", tag = "1")]
                pub alignment: i32,
                #[prost(message, repeated, tag = "11")]
                pub tab_stops: ::prost::alloc::vec::Vec<paragraph::TabStop>,
                #[prost(double, tag = "12")]
                pub default_tab_interval: f64,
            }

            /// Nested message and enum types in `Paragraph`.
            pub mod paragraph {
                #[derive(Clone, Copy, PartialEq, ::prost::Message)]
                pub struct TabStop {
                    #[prost(double, tag = "1")]
                    pub location: f64,
                    #[prost(enumeration = "super::Alignment", tag = "2")]
                    pub alignment: i32,
                }
            }

            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Fill {
                #[prost(message, tag = "10")]
                TextSolidFill(super::super::super::Color),
            }
        }
    }
}
