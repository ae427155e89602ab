use recase::case::fold::{equal_fold, to_upper_str};
use recase::{
    camel_case, kebab_case, pascal_case, screaming_kebab_case, screaming_snake_case, snake_case,
    split_words, Case,
};

const TRANSFORMS: [fn(&str) -> String; 6] = [
    camel_case,
    pascal_case,
    snake_case,
    screaming_snake_case,
    kebab_case,
    screaming_kebab_case,
];

#[test]
fn empty_and_separator_only_inputs() {
    for input in ["", "   ", "--", "__", " _-_ "] {
        assert!(split_words(input).is_empty());
        for transform in TRANSFORMS {
            assert_eq!(transform(input), "", "input {:?}", input);
        }
    }
}

#[test]
fn non_ascii_only_is_one_word() {
    for input in ["用户の", "日本語テキスト", "ключ", "€"] {
        assert_eq!(split_words(input), vec![input]);
        for transform in TRANSFORMS {
            assert_eq!(transform(input), input);
        }
    }
}

#[test]
fn separator_count_matches_word_count() {
    let inputs = [
        "getHTTPResponseCode",
        "simple word here",
        "XMLHttpRequest2",
        "用户のIdList",
        "already_snake_case",
    ];
    for input in inputs {
        let words = split_words(input).len();
        assert_eq!(screaming_snake_case(input).matches('_').count(), words - 1);
        assert_eq!(screaming_kebab_case(input).matches('-').count(), words - 1);
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
    assert_eq!(split_words("with01number"), vec!["with", "01", "number"]);
    assert_eq!(split_words("用户のId"), vec!["用户の", "Id"]);

    assert_eq!(camel_case("simpleWord"), "simpleWord");
    assert_eq!(camel_case("Simple word"), "simpleWord");
    assert_eq!(pascal_case("Simple word"), "SimpleWord");
    assert_eq!(snake_case("wordWith01number"), "word_with_01_number");
    assert_eq!(screaming_kebab_case("HTTPServer"), "HTTP-SERVER");
    assert_eq!(camel_case("用户のid"), "用户のId");
}

#[test]
fn mixed_script_round_trips_through_cases() {
    let input = "用户のUserID";
    assert_eq!(split_words(input), vec!["用户の", "User", "ID"]);
    assert_eq!(snake_case(input), "用户の_user_id");
    assert_eq!(Case::Pascal.apply(&snake_case(input)), "用户のUserId");
}

#[test]
fn output_is_ascii_case_insensitive_equal_to_words() {
    let input = "parseJSONToHTMLString";
    let joined: String = split_words(input).concat();
    assert!(equal_fold(&pascal_case(input), &joined));
    assert_eq!(to_upper_str(&kebab_case(input)), screaming_kebab_case(input));
}
