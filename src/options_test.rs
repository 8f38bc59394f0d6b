use super::*;

mod default {
    use super::*;

    #[test]
    fn when_constructed_should_allow_any_origin_and_leave_other_fields_unset() {
        // Arrange & Act
        let options = CorsOptions::default();

        // Assert
        assert_eq!(options.allow_origin, WILDCARD);
        assert_eq!(options.allow_credentials, None);
        assert_eq!(options.allow_method, None);
        assert_eq!(options.allow_headers, None);
        assert_eq!(options.expose_headers, None);
        assert_eq!(options.max_age, None);
    }

    #[test]
    fn when_mutated_instance_should_not_affect_other_defaults() {
        // Arrange
        let mut first = CorsOptions::default();
        let second = CorsOptions::default();

        // Act
        first.allow_origin = "http://localhost".into();

        // Assert
        assert_ne!(first.allow_origin, second.allow_origin);
    }
}

mod allow_credentials {
    use super::*;

    #[test]
    fn when_variant_is_true_should_render_true() {
        // Arrange & Act & Assert
        assert_eq!(AllowCredentials::True.header_value(), Some("true".into()));
    }

    #[test]
    fn when_variant_is_false_should_render_nothing() {
        // Arrange & Act & Assert
        assert_eq!(AllowCredentials::False.header_value(), None);
    }

    #[test]
    fn when_string_value_is_empty_should_render_nothing() {
        // Arrange
        let credentials = AllowCredentials::Value(String::new());

        // Act & Assert
        assert_eq!(credentials.header_value(), None);
    }

    #[test]
    fn when_string_value_is_non_empty_should_render_it_verbatim() {
        // Arrange
        let credentials = AllowCredentials::from("yes");

        // Act & Assert
        assert_eq!(credentials.header_value(), Some("yes".into()));
    }

    #[test]
    fn when_converted_from_bool_should_map_onto_boolean_variants() {
        // Arrange & Act & Assert
        assert_eq!(AllowCredentials::from(true), AllowCredentials::True);
        assert_eq!(AllowCredentials::from(false), AllowCredentials::False);
    }
}

mod max_age {
    use super::*;

    #[test]
    fn when_duration_is_zero_should_render_zero() {
        // Arrange & Act & Assert
        assert_eq!(MaxAge::Seconds(0).header_value(), "0");
    }

    #[test]
    fn when_duration_is_positive_should_render_decimal_seconds() {
        // Arrange & Act & Assert
        assert_eq!(MaxAge::from(600).header_value(), "600");
    }

    #[test]
    fn when_given_a_string_should_render_it_verbatim() {
        // Arrange & Act & Assert
        assert_eq!(MaxAge::from("86400").header_value(), "86400");
    }
}
